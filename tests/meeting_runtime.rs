#[cfg(test)]
mod tests {
    use agenda_clock::error::MeetingError;
    use agenda_clock::state::{AgendaPageInput, MeetingState, MetricsWindow};
    use agenda_clock::timers::RawDuration;
    use agenda_clock::window::{DateRangeWindow, Direction, Frequency};
    use chrono::{TimeZone, Utc};

    const T0: i64 = 1_700_000_000_000;

    fn secs(s: i64) -> i64 {
        T0 + s * 1000
    }

    fn page(id: &str, expected: Option<RawDuration>) -> AgendaPageInput {
        AgendaPageInput {
            id: id.to_string(),
            title: format!("Page {}", id),
            expected_duration: expected,
        }
    }

    fn meeting() -> MeetingState {
        let mut meeting = MeetingState::new();
        meeting
            .set_agenda(vec![
                page("segue", Some(RawDuration::from(300_i64))),
                page("metrics", Some(RawDuration::from("600"))),
                page("issues", Some(RawDuration::from("a while"))),
            ])
            .unwrap();
        meeting
    }

    #[test]
    fn test_agenda_normalizes_budgets() {
        let meeting = meeting();
        let budgets: Vec<Option<i64>> = meeting
            .pages
            .iter()
            .map(|p| p.timer.expected_duration_s)
            .collect();
        assert_eq!(budgets, vec![Some(300), Some(600), None]);
        assert_eq!(meeting.current_page_id, None);
        assert_eq!(meeting.current_timers(T0), None);
    }

    #[test]
    fn test_duplicate_page_ids_rejected() {
        let mut meeting = MeetingState::new();
        let result = meeting.set_agenda(vec![page("a", None), page("a", None)]);
        assert_eq!(result, Err(MeetingError::DuplicatePage("a".to_string())));
        assert!(meeting.pages.is_empty());
    }

    #[test]
    fn test_unknown_page_rejected() {
        let mut meeting = meeting();
        assert_eq!(
            meeting.start_page("headlines", T0),
            Err(MeetingError::UnknownPage("headlines".to_string()))
        );
    }

    #[test]
    fn test_running_page_counts_down() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();
        let timers = meeting.current_timers(secs(90)).unwrap();
        assert_eq!(timers.elapsed_s, 90);
        assert_eq!(timers.remaining_s, 210);
    }

    #[test]
    fn test_pause_and_resume_exclude_paused_time() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();
        meeting.pause(secs(100)).unwrap();
        assert_eq!(meeting.current_timers(secs(400)).unwrap().elapsed_s, 100);

        meeting.resume(secs(400)).unwrap();
        assert_eq!(meeting.current_page().unwrap().timer.time_spent_paused_s, 300);
        assert_eq!(meeting.current_timers(secs(460)).unwrap().elapsed_s, 160);

        meeting.pause(secs(500)).unwrap();
        meeting.resume(secs(520)).unwrap();
        assert_eq!(meeting.current_page().unwrap().timer.time_spent_paused_s, 320);
        assert_eq!(meeting.current_timers(secs(620)).unwrap().elapsed_s, 300);
    }

    #[test]
    fn test_short_pauses_accumulate_to_the_millisecond() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();

        // Ten cycles of 100ms running then 900ms paused: one second of real work
        let mut now = T0;
        for _ in 0..10 {
            now += 100;
            meeting.pause(now).unwrap();
            now += 900;
            meeting.resume(now).unwrap();
        }

        let page = meeting.current_page().unwrap();
        assert_eq!(page.paused_ms, 9_000);
        assert_eq!(page.timer.time_spent_paused_s, 9);
        assert_eq!(meeting.current_timers(now).unwrap().elapsed_s, 1);
    }

    #[test]
    fn test_paused_remainder_carries_into_next_pause() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();
        meeting.pause(T0 + 1_000).unwrap();
        meeting.resume(T0 + 1_600).unwrap();
        assert_eq!(meeting.current_page().unwrap().timer.time_spent_paused_s, 0);

        meeting.pause(T0 + 2_000).unwrap();
        meeting.resume(T0 + 2_600).unwrap();
        assert_eq!(meeting.current_page().unwrap().timer.time_spent_paused_s, 1);
    }

    #[test]
    fn test_non_positive_start_time_rejected() {
        let mut meeting = meeting();
        assert_eq!(
            meeting.start_page("segue", 0),
            Err(MeetingError::InvalidTimestamp(0))
        );
        assert_eq!(
            meeting.start_page("segue", -5),
            Err(MeetingError::InvalidTimestamp(-5))
        );
        assert_eq!(meeting.current_page_id, None);
    }

    #[test]
    fn test_pause_state_errors() {
        let mut meeting = meeting();
        assert_eq!(meeting.resume(T0), Err(MeetingError::NotPaused));
        meeting.pause(T0).unwrap();
        assert_eq!(meeting.pause(secs(1)), Err(MeetingError::AlreadyPaused));
    }

    #[test]
    fn test_revisited_page_carries_previous_time() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();
        meeting.start_page("metrics", secs(120)).unwrap();
        meeting.start_page("segue", secs(180)).unwrap();

        let timers = meeting.current_timers(secs(200)).unwrap();
        assert_eq!(timers.elapsed_s, 140);

        let summary = meeting.summary(secs(200));
        let spent: Vec<(String, i64, bool)> = summary
            .into_iter()
            .map(|p| (p.id, p.spent_s, p.is_current))
            .collect();
        assert_eq!(
            spent,
            vec![
                ("segue".to_string(), 140, true),
                ("metrics".to_string(), 60, false),
                ("issues".to_string(), 0, false),
            ]
        );
    }

    #[test]
    fn test_page_started_while_paused_waits_for_resume() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();
        meeting.pause(secs(10)).unwrap();
        meeting.start_page("metrics", secs(20)).unwrap();

        assert_eq!(meeting.summary(secs(20))[0].spent_s, 10);
        assert_eq!(meeting.current_timers(secs(40)).unwrap().elapsed_s, 0);

        meeting.resume(secs(50)).unwrap();
        assert_eq!(meeting.current_timers(secs(100)).unwrap().elapsed_s, 50);
    }

    #[test]
    fn test_starting_active_page_is_a_no_op() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();
        meeting.start_page("segue", secs(30)).unwrap();
        assert_eq!(meeting.current_timers(secs(60)).unwrap().elapsed_s, 60);
    }

    #[test]
    fn test_page_without_budget_is_timed_without_countdown() {
        let mut meeting = meeting();
        meeting.start_page("issues", T0).unwrap();
        let timers = meeting.current_timers(secs(4000)).unwrap();
        assert_eq!(timers.elapsed_s, 4000);
        assert!(!timers.is_overtime);
    }

    #[test]
    fn test_new_agenda_resets_meeting() {
        let mut meeting = meeting();
        meeting.start_page("segue", T0).unwrap();
        meeting.pause(secs(5)).unwrap();
        meeting.set_agenda(vec![page("x", Some(RawDuration::from(60_i64)))]).unwrap();
        assert_eq!(meeting.current_page_id, None);
        assert!(!meeting.is_paused);
    }

    #[test]
    fn test_metrics_window_steps_and_resets() {
        let now = Utc.with_ymd_and_hms(2023, 8, 17, 9, 0, 0).unwrap().timestamp();
        let mut metrics = MetricsWindow::current(Frequency::Weekly, now).unwrap();
        let q3_start = Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap().timestamp();
        assert_eq!(metrics.window.start_date, q3_start);

        let stepped = metrics.step(Direction::Forward, true).unwrap();
        assert_eq!(stepped, metrics.window);
        assert_eq!(stepped.start_date, q3_start);
        assert_eq!(
            stepped.end_date,
            Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap().timestamp()
        );

        let inverted = DateRangeWindow {
            start_date: 10,
            end_date: 0,
        };
        assert!(metrics.reset(Frequency::Monthly, inverted).is_err());
        assert_eq!(metrics.frequency, Frequency::Weekly);

        metrics
            .reset(Frequency::Monthly, DateRangeWindow::new(0, 10).unwrap())
            .unwrap();
        assert_eq!(metrics.frequency, Frequency::Monthly);
    }
}
