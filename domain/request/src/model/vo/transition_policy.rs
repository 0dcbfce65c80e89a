use serde::{Deserialize, Serialize};

use crate::exception::{RequestException, RequestResult};
use crate::model::entity::RequestStatus;

/// Which status changes a status update accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionPolicy {
    /// Any status, recognized or not, from any status
    #[default]
    Permissive,
    /// Only along `pending → in-progress → done`, staying put is allowed
    ForwardOnly,
}

impl TransitionPolicy {
    pub fn check(&self, from: &RequestStatus, to: &RequestStatus) -> RequestResult<()> {
        match self {
            Self::Permissive => Ok(()),
            Self::ForwardOnly => {
                let to_rank = to.rank().ok_or_else(|| RequestException::UnknownStatus {
                    status: to.to_string(),
                })?;
                // Records holding a legacy unrecognized status may move anywhere known.
                match from.rank() {
                    Some(from_rank) if from_rank > to_rank => {
                        Err(RequestException::InvalidTransition {
                            from: from.clone(),
                            to: to.clone(),
                        })
                    }
                    _ => Ok(()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RequestStatus::*;

    #[test]
    fn permissive_allows_everything() {
        let policy = TransitionPolicy::Permissive;
        assert!(policy.check(&Done, &Pending).is_ok());
        assert!(policy.check(&Pending, &Unrecognized("lost".to_string())).is_ok());
    }

    #[test]
    fn forward_only_allows_forward_and_same() {
        let policy = TransitionPolicy::ForwardOnly;
        assert!(policy.check(&Pending, &InProgress).is_ok());
        assert!(policy.check(&Pending, &Done).is_ok());
        assert!(policy.check(&InProgress, &InProgress).is_ok());
        assert!(policy.check(&Unrecognized("lost".to_string()), &Pending).is_ok());
    }

    #[test]
    fn forward_only_rejects_backward_and_unknown() {
        let policy = TransitionPolicy::ForwardOnly;
        assert!(matches!(
            policy.check(&Done, &Pending),
            Err(RequestException::InvalidTransition { .. })
        ));
        assert!(matches!(
            policy.check(&Pending, &Unrecognized("lost".to_string())),
            Err(RequestException::UnknownStatus { status }) if status == "lost"
        ));
    }

    #[test]
    fn deserializes_from_kebab_case() {
        let policy: TransitionPolicy = serde_json::from_str(r#""forward-only""#).unwrap();
        assert_eq!(policy, TransitionPolicy::ForwardOnly);
    }
}
