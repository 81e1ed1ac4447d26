#[cfg(test)]
mod tests {
    use crate::models::MeetingPurpose;
    use crate::widget::{BookingError, BookingModal, WidgetPhase};
    use akshara_common::services::mock::MockBookingSubmitter;
    use akshara_content::FOUNDERS;
    use chrono::NaiveDate;

    fn march_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn open_modal() -> BookingModal {
        let mut modal = BookingModal::new(FOUNDERS.to_vec());
        modal.open(march_2025(), None);
        modal
    }

    #[tokio::test]
    async fn submit_without_a_selection_never_calls_the_submitter() {
        let mut modal = open_modal();
        let submitter = MockBookingSubmitter::succeeding();
        let state = modal.state_mut().unwrap();

        let result = state.submit(&submitter).await;
        assert_eq!(result, Err(BookingError::DateTimeNotSelected));
        assert_eq!(state.phase(), WidgetPhase::Form);
        assert!(submitter.submissions().is_empty());

        // A date alone is still not enough.
        state.calendar_mut().select_day(12);
        let result = state.submit(&submitter).await;
        assert_eq!(result, Err(BookingError::DateTimeNotSelected));
        assert_eq!(state.phase(), WidgetPhase::Form);
        assert!(submitter.submissions().is_empty());
    }

    #[tokio::test]
    async fn successful_submission_reaches_the_confirmation_view() {
        let mut modal = open_modal();
        let submitter = MockBookingSubmitter::succeeding();
        let state = modal.state_mut().unwrap();

        state.form_mut().name = "A. Student".to_string();
        state.form_mut().email = "a@example.com".to_string();
        state.form_mut().phone = "555-0100".to_string();
        state.calendar_mut().select_day(12);
        state.calendar_mut().select_time("10:30");

        let phase = state.submit(&submitter).await.unwrap();
        assert_eq!(phase, WidgetPhase::Success);
        assert!(!state.is_loading());

        let confirmation = state.confirmation().unwrap();
        assert_eq!(confirmation.scheduled_for, "2025-03-12 at 10:30");
        assert_eq!(confirmation.email, "a@example.com");

        let submissions = submitter.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].name, "A. Student");
        assert_eq!(submissions[0].date, "2025-03-12");
        assert_eq!(submissions[0].time, "10:30");
        assert_eq!(submissions[0].purpose, "Partnership");
        assert_eq!(submissions[0].founder_id, "");
        assert!(!submissions[0].is_urgent);
    }

    #[tokio::test]
    async fn transport_failure_is_masked_as_success() {
        let mut modal = open_modal();
        let submitter = MockBookingSubmitter::failing("connection reset by peer");
        let state = modal.state_mut().unwrap();

        state.form_mut().email = "a@example.com".to_string();
        state.calendar_mut().select_day(12);
        state.calendar_mut().select_time("10:30");

        let phase = state.submit(&submitter).await.unwrap();
        assert_eq!(phase, WidgetPhase::Success);
        assert!(state.confirmation().is_some());
    }

    #[tokio::test]
    async fn declined_submission_keeps_the_form_phase() {
        // Only a successful return value transitions the phase; an explicit
        // `false` from the interface leaves the form on screen.
        let mut modal = open_modal();
        let submitter = MockBookingSubmitter::reporting(false);
        let state = modal.state_mut().unwrap();

        state.calendar_mut().select_day(12);
        state.calendar_mut().select_time("10:30");

        let phase = state.submit(&submitter).await.unwrap();
        assert_eq!(phase, WidgetPhase::Form);
        assert_eq!(submitter.submissions().len(), 1);
        assert!(state.confirmation().is_none());
    }

    #[tokio::test]
    async fn submit_after_confirmation_is_a_no_op() {
        let mut modal = open_modal();
        let submitter = MockBookingSubmitter::succeeding();
        let state = modal.state_mut().unwrap();

        state.calendar_mut().select_day(12);
        state.calendar_mut().select_time("10:30");
        state.submit(&submitter).await.unwrap();

        let phase = state.submit(&submitter).await.unwrap();
        assert_eq!(phase, WidgetPhase::Success);
        assert_eq!(submitter.submissions().len(), 1);
    }

    #[tokio::test]
    async fn reopening_resets_all_state() {
        let mut modal = open_modal();
        let submitter = MockBookingSubmitter::succeeding();

        {
            let state = modal.state_mut().unwrap();
            state.form_mut().name = "A. Student".to_string();
            state.form_mut().email = "a@example.com".to_string();
            state.form_mut().is_urgent = true;
            state.calendar_mut().select_day(12);
            state.calendar_mut().select_time("10:30");
            assert_eq!(state.submit(&submitter).await.unwrap(), WidgetPhase::Success);
        }

        modal.close();
        assert!(!modal.is_open());
        assert!(modal.state().is_none());

        modal.open(march_2025(), None);
        let state = modal.state().unwrap();
        assert_eq!(state.phase(), WidgetPhase::Form);
        assert!(state.form().name.is_empty());
        assert!(state.form().email.is_empty());
        assert!(!state.form().is_urgent);
        assert_eq!(state.form().purpose, MeetingPurpose::Partnership);
        assert_eq!(state.calendar().selected_date(), None);
        assert_eq!(state.calendar().selected_time(), None);
    }

    #[test]
    fn staff_dropdown_leads_with_no_preference() {
        let modal = BookingModal::new(FOUNDERS.to_vec());
        let options = modal.staff_options();

        assert_eq!(options.len(), FOUNDERS.len() + 1);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Any Staff Member");
        assert_eq!(options[1].value, FOUNDERS[0].id);
        assert_eq!(options[1].label, FOUNDERS[0].name);
    }

    #[test]
    fn preselected_founder_lands_in_the_form() {
        let mut modal = BookingModal::new(FOUNDERS.to_vec());
        modal.open(march_2025(), Some("f2"));
        assert_eq!(modal.state().unwrap().form().founder_id, "f2");
    }

    #[tokio::test]
    async fn urgent_flag_and_staff_preference_travel_with_the_payload() {
        let mut modal = BookingModal::new(FOUNDERS.to_vec());
        modal.open(march_2025(), Some("f3"));
        let submitter = MockBookingSubmitter::succeeding();
        let state = modal.state_mut().unwrap();

        state.form_mut().is_urgent = true;
        state.form_mut().message = "Discussing the science fair.".to_string();
        state.calendar_mut().select_day(20);
        state.calendar_mut().select_time("15:00");
        state.submit(&submitter).await.unwrap();

        let submissions = submitter.submissions();
        assert_eq!(submissions[0].founder_id, "f3");
        assert!(submissions[0].is_urgent);
        assert_eq!(submissions[0].message, "Discussing the science fair.");
        assert_eq!(submissions[0].date, "2025-03-20");
    }
}
