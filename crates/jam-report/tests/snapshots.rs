//! Snapshot tests pinning the report surfaces to a fixed fixture.

use jam_model::Member;
use jam_report::{compute_stats, export_csv};

fn fixture() -> Vec<Member> {
    vec![
        Member {
            id: "@ada".to_string(),
            name: "Ada Lovelace".to_string(),
            handle: "@ada".to_string(),
            profile_url: "@ada".to_string(),
            streak: 3,
            syllabus_completed: 4,
            skill_badges: 5,
            arcade_games: 2,
            trivia_games: 1,
            points: 13,
            verified: true,
            modules: 4,
            ..Member::default()
        },
        Member {
            id: "@grace".to_string(),
            name: "Grace".to_string(),
            handle: "@grace".to_string(),
            profile_url: "@grace".to_string(),
            skill_badges: 1,
            points: 1,
            modules: 1,
            ..Member::default()
        },
    ]
}

#[test]
fn stats_json_shape() {
    let stats = compute_stats(&fixture());
    insta::assert_json_snapshot!(stats, @r#"
    {
      "participants": 2,
      "activeParticipants": 1,
      "totalPoints": 14,
      "avgModules": 2.5,
      "activeStreaks": 1,
      "totalSkillBadges": 6,
      "totalArcadeGames": 2,
      "totalTriviaGames": 1,
      "verifiedCount": 1
    }
    "#);
}

#[test]
fn csv_document() {
    let doc = export_csv(&fixture());
    insta::assert_snapshot!(doc, @r"
    place,username,link,streak,syllabusCompleted,skillBadges,arcadeGame,points,modules,verified
    1,Ada Lovelace,@ada,3,4,5,2,13,4,Yes
    2,Grace,@grace,0,0,1,0,1,1,No
    ");
}
