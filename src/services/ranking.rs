//! Batch rank recomputation.
//!
//! Ranks are placeholders until an admin triggers a recomputation; they
//! are never adjusted inline in request handlers. The strategy sits
//! behind `RankProvider` so the ordering policy can change without
//! touching persistence.

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    db::repositories::{
        user_repo::{RankAssignment, RankingRow},
        UserRepository,
    },
    error::AppResult,
};

/// Turns the user population into a complete set of rank assignments.
pub trait RankProvider: Send + Sync {
    fn recompute_ranks(&self, rows: &[RankingRow]) -> Vec<RankAssignment>;
}

/// Default ordering: xp descending, earlier signup breaks ties. College
/// ranks run dense within each college in the same order.
pub struct XpRankProvider;

impl RankProvider for XpRankProvider {
    fn recompute_ranks(&self, rows: &[RankingRow]) -> Vec<RankAssignment> {
        let mut ordered: Vec<&RankingRow> = rows.iter().collect();
        ordered.sort_by(|a, b| b.xp.cmp(&a.xp).then(a.created_at.cmp(&b.created_at)));

        let mut per_college: HashMap<&str, i32> = HashMap::new();

        ordered
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let counter = per_college
                    .entry(row.college.as_str())
                    .and_modify(|c| *c += 1)
                    .or_insert(1);

                RankAssignment {
                    user_id: row.id,
                    global_rank: idx as i32 + 1,
                    college_rank: *counter,
                }
            })
            .collect()
    }
}

pub struct RankingService;

impl RankingService {
    /// Recompute every user's ranks and apply them in one transaction.
    /// Returns how many users were reranked.
    pub async fn recompute_all(pool: &PgPool, provider: &dyn RankProvider) -> AppResult<usize> {
        let rows = UserRepository::ranking_rows(pool).await?;
        let assignments = provider.recompute_ranks(&rows);
        UserRepository::apply_ranks(pool, &assignments).await?;
        Ok(assignments.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn row(xp: i32, college: &str, signup_offset_secs: i64) -> RankingRow {
        RankingRow {
            id: Uuid::new_v4(),
            college: college.to_string(),
            xp,
            created_at: Utc::now() + Duration::seconds(signup_offset_secs),
        }
    }

    #[test]
    fn global_ranks_follow_xp_descending() {
        let rows = vec![row(100, "A", 0), row(900, "A", 0), row(400, "B", 0)];
        let ranks = XpRankProvider.recompute_ranks(&rows);

        let by_id: HashMap<Uuid, &RankAssignment> =
            ranks.iter().map(|r| (r.user_id, r)).collect();

        assert_eq!(by_id[&rows[1].id].global_rank, 1);
        assert_eq!(by_id[&rows[2].id].global_rank, 2);
        assert_eq!(by_id[&rows[0].id].global_rank, 3);
    }

    #[test]
    fn ties_break_toward_earlier_signup() {
        let older = row(500, "A", -100);
        let newer = row(500, "A", 100);
        let ranks = XpRankProvider.recompute_ranks(&[newer.clone(), older.clone()]);

        let by_id: HashMap<Uuid, &RankAssignment> =
            ranks.iter().map(|r| (r.user_id, r)).collect();

        assert_eq!(by_id[&older.id].global_rank, 1);
        assert_eq!(by_id[&newer.id].global_rank, 2);
    }

    #[test]
    fn college_ranks_are_dense_per_college() {
        let rows = vec![
            row(900, "A", 0),
            row(700, "B", 0),
            row(500, "A", 0),
            row(300, "B", 0),
        ];
        let ranks = XpRankProvider.recompute_ranks(&rows);

        let by_id: HashMap<Uuid, &RankAssignment> =
            ranks.iter().map(|r| (r.user_id, r)).collect();

        assert_eq!(by_id[&rows[0].id].college_rank, 1);
        assert_eq!(by_id[&rows[2].id].college_rank, 2);
        assert_eq!(by_id[&rows[1].id].college_rank, 1);
        assert_eq!(by_id[&rows[3].id].college_rank, 2);
    }

    #[test]
    fn empty_population_yields_no_assignments() {
        assert!(XpRankProvider.recompute_ranks(&[]).is_empty());
    }
}
