//! Status normalization services for the terminal checklist.
//!
//! This module provides the resolver that turns raw persisted status text
//! into a member of the status enumeration, so that checklist files written
//! by hand or by older versions of the tool always display safely.

use super::models::Status;

/// Normalizes raw stored status values into the [`Status`] enumeration.
///
/// The resolver is pure and total: it never fails for any input. Missing,
/// empty, or unrecognized values resolve to [`Status::NotDone`], because an
/// incomplete task must never silently read as done.
///
/// # Examples
///
/// ```
/// use tckl::domain::{Status, StatusResolver};
///
/// assert_eq!(StatusResolver::resolve(Some("TRUE")), Status::Done);
/// assert_eq!(StatusResolver::resolve(Some("  FALSE  ")), Status::NotDone);
/// assert_eq!(StatusResolver::resolve(Some("NÃO SE APLICA")), Status::NotApplicable);
/// assert_eq!(StatusResolver::resolve(Some("whatever")), Status::NotDone);
/// assert_eq!(StatusResolver::resolve(None), Status::NotDone);
/// ```
pub struct StatusResolver;

impl StatusResolver {
    /// Resolves a raw status value to a known [`Status`].
    ///
    /// Input is trimmed before matching. A value matching a known wire
    /// label resolves to that status; everything else resolves to
    /// [`Status::NotDone`].
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw status text as read from storage, if present
    ///
    /// # Returns
    ///
    /// The matching status, or [`Status::NotDone`] as the fail-safe default
    pub fn resolve(raw: Option<&str>) -> Status {
        match raw {
            Some(value) => match value.trim() {
                "TRUE" => Status::Done,
                "FALSE" => Status::NotDone,
                "NÃO SE APLICA" => Status::NotApplicable,
                _ => Status::NotDone,
            },
            None => Status::NotDone,
        }
    }
}
