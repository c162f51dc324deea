use super::aggregate::{TeamLimits, TeamMemberUsage, TeamUsage};
use super::store::TeamUsageStore;

pub fn seed_team_usage() -> TeamUsage {
    TeamUsage {
        total_data_used_gb: 750.0,
        total_credits_used: 1500.0,
    }
}

pub fn seed_team_limits() -> TeamLimits {
    TeamLimits {
        max_data_gb: 1000.0,
        max_credits: 5000.0,
        default_member_data_limit_gb: 50.0,
        default_member_credit_limit: 100.0,
        max_credit_per_user: 1000.0,
    }
}

fn member(email: &str, codes: &[&str], requested: f64, redeemed: f64) -> TeamMemberUsage {
    TeamMemberUsage {
        email: email.to_string(),
        requested_codes: codes.iter().map(|c| c.to_string()).collect(),
        requested_value: requested,
        redeemed_value: redeemed,
    }
}

pub fn seed_member_usage() -> Vec<TeamMemberUsage> {
    vec![
        member("john@partner.com", &["ESIM-123", "ESIM-456"], 250.0, 200.0),
        member("jane@partner.com", &["ESIM-789", "ESIM-012", "ESIM-345"], 400.0, 350.0),
        member("mike@partner.com", &["ESIM-678"], 150.0, 100.0),
        member("alice@example.org", &["ESIM-901", "ESIM-234"], 300.0, 280.0),
        member("bob@example.org", &["ESIM-567"], 100.0, 100.0),
        member(
            "charlie@partner.com",
            &["ESIM-890", "ESIM-111", "ESIM-222", "ESIM-333"],
            600.0,
            550.0,
        ),
        member("diana@partner.com", &["ESIM-444", "ESIM-555"], 200.0, 180.0),
    ]
}

pub fn seed_team_usage_store() -> TeamUsageStore {
    TeamUsageStore::new(seed_team_usage(), seed_team_limits(), seed_member_usage())
}
