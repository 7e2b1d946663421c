//! Calendar serialization port
//!
//! The core produces ordered [`MergedEvent`]s; this port turns them into a
//! `text/calendar` document. Implemented by an adapter in the
//! infrastructure layer.

use domain::MergedEvent;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for rendering merged events into an iCalendar document
#[cfg_attr(test, automock)]
pub trait CalendarPort: Send + Sync {
    /// Serialize the events under the given calendar name
    fn render(
        &self,
        calendar_name: &str,
        events: &[MergedEvent],
    ) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn CalendarPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CalendarPort>();
    }
}
