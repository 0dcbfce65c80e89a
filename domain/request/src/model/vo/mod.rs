mod request_draft;
mod request_stats;
mod transition_policy;

#[rustfmt::skip]
pub use {
    request_draft::RequestDraft,
    request_stats::RequestStats,
    transition_policy::TransitionPolicy,
};
