//! Local list state for leave requests with optimistic decisions.
//!
//! An approval or rejection is applied to the local list immediately; a
//! refetch that lands later is treated as reconciliation and wins on every
//! field, since it is the most recent read of the authoritative store.

use crate::api::types::LeaveRequest;

#[derive(Debug, Clone, Default)]
pub struct LeaveListState {
    pub leaves: Vec<LeaveRequest>,
    pub loading: bool,
}

/// Applies a decision to the local copy of a request. Returns false when
/// the id is unknown (already reconciled away), which callers treat as a
/// no-op rather than an error.
pub fn apply_decision(leaves: &mut [LeaveRequest], leave_id: i64, status: &str) -> bool {
    match leaves.iter_mut().find(|leave| leave.id == leave_id) {
        Some(leave) => {
            leave.status = status.to_string();
            true
        }
        None => false,
    }
}

/// Replaces local state with a fetched snapshot, last-write-wins per
/// record: fetched fields overwrite optimistic ones, records the server no
/// longer returns are dropped, new ones are kept in server order. No
/// merge-by-version is attempted; concurrent editors overwrite each other.
pub fn reconcile(local: &mut Vec<LeaveRequest>, fetched: Vec<LeaveRequest>) {
    *local = fetched;
}

pub fn pending_count(leaves: &[LeaveRequest]) -> usize {
    leaves.iter().filter(|leave| leave.is_pending()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::leave_status;
    use chrono::{NaiveDate, NaiveDateTime};

    fn leave(id: i64, status: &str) -> LeaveRequest {
        LeaveRequest {
            id,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            reason: "Family event".into(),
            leave_type: "Annual".into(),
            status: status.into(),
            applied_at: NaiveDateTime::parse_from_str("2026-09-01T09:30:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            user_id: 7,
            user_name: Some("Admin User".into()),
        }
    }

    #[test]
    fn decision_updates_matching_record_in_place() {
        let mut leaves = vec![leave(1, leave_status::PENDING), leave(2, leave_status::PENDING)];
        assert!(apply_decision(&mut leaves, 2, leave_status::APPROVED));
        assert_eq!(leaves[1].status, leave_status::APPROVED);
        assert_eq!(leaves[0].status, leave_status::PENDING);
        assert_eq!(pending_count(&leaves), 1);
    }

    #[test]
    fn decision_on_unknown_id_is_a_no_op() {
        let mut leaves = vec![leave(1, leave_status::PENDING)];
        assert!(!apply_decision(&mut leaves, 99, leave_status::REJECTED));
        assert_eq!(leaves[0].status, leave_status::PENDING);
    }

    #[test]
    fn reconcile_is_last_write_wins() {
        let mut local = vec![leave(1, leave_status::APPROVED)];
        // A refetch that raced the optimistic update silently overwrites it.
        reconcile(&mut local, vec![leave(1, leave_status::PENDING), leave(3, leave_status::PENDING)]);
        assert_eq!(local.len(), 2);
        assert_eq!(local[0].status, leave_status::PENDING);
        assert_eq!(local[1].id, 3);
    }
}
