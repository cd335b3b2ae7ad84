//! Store key layout.
//!
//! One pointer slot and one ranked collection per published generation,
//! plus the read-through cache slot for the raw event list:
//!
//! ```text
//! gh:repos:{owner}:{repo}:contribution_setid          — generation pointer
//! gh:repos:{owner}:{repo}:contributions:{generation}  — contribution set
//! gh:repos:{owner}:{repo}:activity_events             — event cache
//! ```

/// The slot holding the current generation id for a repository.
pub fn generation_pointer(owner: &str, repo: &str) -> String {
  format!("gh:repos:{owner}:{repo}:contribution_setid")
}

/// The ranked collection holding one generation's contributions.
pub fn generation_set(owner: &str, repo: &str, generation: &str) -> String {
  format!("gh:repos:{owner}:{repo}:contributions:{generation}")
}

/// The read-through cache slot for the raw upstream event list.
pub fn event_cache(owner: &str, repo: &str) -> String {
  format!("gh:repos:{owner}:{repo}:activity_events")
}
