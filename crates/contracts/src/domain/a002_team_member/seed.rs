use super::aggregate::{TeamMember, TeamMemberId, TeamMemberStatus};

pub const SEED_MEMBER_COUNT: usize = 50;

/// `member1` … `member50`; статусы чередуются Active → Inactive → Pending
pub fn seed_team_members() -> Vec<TeamMember> {
    (1..=SEED_MEMBER_COUNT)
        .map(|i| TeamMember {
            id: TeamMemberId(format!("member{}", i)),
            email: format!("member{}@example.com", i),
            referral_code: format!("REF_MEMBER{}", i),
            status: match i % 3 {
                1 => TeamMemberStatus::Active,
                2 => TeamMemberStatus::Inactive,
                _ => TeamMemberStatus::Pending,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_members() {
        let members = seed_team_members();
        assert_eq!(members.len(), 50);
        assert_eq!(members[0].id.0, "member1");
        assert_eq!(members[0].email, "member1@example.com");
        assert_eq!(members[49].referral_code, "REF_MEMBER50");
        assert_eq!(members[0].status, TeamMemberStatus::Active);
    }
}
