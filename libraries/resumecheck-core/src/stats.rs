//! Derived statistics and client-side search
//!
//! Everything here folds over whatever list the page currently holds. Nothing
//! is cached; callers recompute on every render.

use crate::types::{Resume, Role, User};

/// Summary cards on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_resumes: usize,
    /// Rounded mean score
    pub average_score: i64,
    pub best_score: f64,
    /// Sum of `skills_found` over all resumes
    pub total_keywords: u64,
}

/// Returns `None` for an empty list; the dashboard shows no cards then.
pub fn dashboard_stats(resumes: &[Resume]) -> Option<DashboardStats> {
    if resumes.is_empty() {
        return None;
    }

    let total: f64 = resumes.iter().map(|r| r.score).sum();
    let best_score = resumes
        .iter()
        .map(|r| r.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let total_keywords = resumes
        .iter()
        .map(|r| u64::from(r.analysis.details.skills_found))
        .sum();

    Some(DashboardStats {
        total_resumes: resumes.len(),
        average_score: round_half_up(total / resumes.len() as f64),
        best_score,
        total_keywords,
    })
}

/// Header counters on the admin panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_resumes: usize,
    /// Rounded mean score, 0 when there are no resumes
    pub average_score: i64,
    pub admin_users: usize,
}

pub fn admin_stats(users: &[User], resumes: &[Resume]) -> AdminStats {
    let average_score = if resumes.is_empty() {
        0
    } else {
        let total: f64 = resumes.iter().map(|r| r.score).sum();
        round_half_up(total / resumes.len() as f64)
    };

    AdminStats {
        total_users: users.len(),
        total_resumes: resumes.len(),
        average_score,
        admin_users: users.iter().filter(|u| u.role == Role::Admin).count(),
    }
}

/// Halves round toward positive infinity
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Case-insensitive substring match; an empty term matches everything
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Users whose name or email contains `term`
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|u| contains_ignore_case(&u.name, &needle) || contains_ignore_case(&u.email, &needle))
        .collect()
}

/// Resumes whose owner name, owner email or file name contains `term`
pub fn filter_resumes<'a>(resumes: &'a [Resume], term: &str) -> Vec<&'a Resume> {
    let needle = term.to_lowercase();
    resumes
        .iter()
        .filter(|r| {
            let owner_match = r.user.as_ref().is_some_and(|owner| {
                contains_ignore_case(&owner.name, &needle)
                    || contains_ignore_case(&owner.email, &needle)
            });
            owner_match || contains_ignore_case(&r.file_name, &needle)
        })
        .collect()
}
