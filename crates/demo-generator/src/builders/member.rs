//! The demo member's profile and membership. Neither draws from the generator.

use crate::catalog::member;
use demo_core::{Clock, MemberProfile, Membership};

pub fn build_profile(clock: &Clock) -> MemberProfile {
    MemberProfile {
        id: member::PROFILE_ID.to_string(),
        first_name: member::FIRST_NAME.to_string(),
        last_name: member::LAST_NAME.to_string(),
        email: member::EMAIL.to_string(),
        created_at: clock.days_ago(member::MEMBER_FOR_DAYS),
    }
}

pub fn build_membership(profile: &MemberProfile, clock: &Clock) -> Membership {
    let start_date = clock.days_ago(member::STARTED_DAYS_AGO);
    Membership {
        id: member::MEMBERSHIP_ID.to_string(),
        user_id: profile.id.clone(),
        plan_type: member::PLAN_TYPE.to_string(),
        status: member::STATUS.to_string(),
        credits_remaining: member::CREDITS,
        auto_renew: true,
        start_date,
        end_date: clock.days_ahead(member::RENEWS_IN_DAYS),
        created_at: start_date,
    }
}
