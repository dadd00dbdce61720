#[cfg(test)]
mod tests {
    use agenda_clock::timers::{compute_current_page_timers, elapsed_seconds, PageTimerState};

    const T0: i64 = 1_700_000_000_000;

    fn started(expected: Option<i64>) -> PageTimerState {
        PageTimerState {
            time_last_started: T0,
            ..PageTimerState::new(expected)
        }
    }

    #[test]
    fn test_no_current_page_yields_none() {
        assert_eq!(compute_current_page_timers(None, false, T0), None);
        assert_eq!(compute_current_page_timers(None, true, T0), None);
    }

    #[test]
    fn test_unstarted_page_has_zero_elapsed() {
        let state = PageTimerState::new(Some(300));
        let result = compute_current_page_timers(Some(&state), false, T0).unwrap();
        assert_eq!(result.elapsed_s, 0);
        assert_eq!(result.remaining_s, 300);
        assert!(!result.is_overtime);
        assert_eq!(result.remaining_percentage_of_expected_time, 100.0);
    }

    #[test]
    fn test_running_page_counts_whole_seconds() {
        let state = PageTimerState {
            time_previously_spent_s: Some(30),
            time_spent_paused_s: 10,
            ..started(Some(600))
        };
        // 125.4s on the clock + 30 carried - 10 paused
        assert_eq!(elapsed_seconds(&state, false, T0 + 125_400), 145);

        let result = compute_current_page_timers(Some(&state), false, T0 + 125_400).unwrap();
        assert_eq!(result.elapsed_s, 145);
        assert_eq!(result.remaining_s, 455);
        assert_eq!(result.overtime_s, -455);
    }

    #[test]
    fn test_paused_page_stops_at_pause_stamp() {
        let state = PageTimerState {
            time_last_paused: Some(T0 + 60_000),
            ..started(Some(300))
        };
        assert_eq!(elapsed_seconds(&state, true, T0 + 600_000), 60);
        assert_eq!(elapsed_seconds(&state, true, T0 + 3_600_000), 60);
    }

    #[test]
    fn test_paused_without_stamp_uses_now() {
        let state = started(Some(300));
        assert_eq!(elapsed_seconds(&state, true, T0 + 42_999), 42);
    }

    #[test]
    fn test_elapsed_is_clamped_to_zero() {
        let state = PageTimerState {
            time_spent_paused_s: 100,
            ..started(Some(300))
        };
        assert_eq!(elapsed_seconds(&state, false, T0 + 5_000), 0);
        assert_eq!(elapsed_seconds(&state, true, T0 + 5_000), 0);
        // Clock behind the start stamp
        assert_eq!(elapsed_seconds(&started(None), false, T0 - 10_000), 0);
    }

    #[test]
    fn test_elapsed_never_negative_over_many_inputs() {
        for paused_s in [0, 1, 59, 600, 10_000] {
            for offset_ms in [0, 999, 1_000, 61_500, 7_200_000] {
                let state = PageTimerState {
                    time_spent_paused_s: paused_s,
                    time_previously_spent_s: Some(paused_s / 2),
                    ..started(Some(300))
                };
                for is_paused in [true, false] {
                    let result =
                        compute_current_page_timers(Some(&state), is_paused, T0 + offset_ms).unwrap();
                    assert!(result.elapsed_s >= 0);
                    assert_eq!(result.is_overtime, result.elapsed_s > 300);
                    assert_eq!(result.overtime_s, result.elapsed_s - 300);
                    assert_eq!(result.remaining_s, 300 - result.elapsed_s);
                }
            }
        }
    }

    #[test]
    fn test_overtime_figures() {
        let state = started(Some(300));
        let result = compute_current_page_timers(Some(&state), false, T0 + 360_000).unwrap();
        assert!(result.is_overtime);
        assert_eq!(result.elapsed_s, 360);
        assert_eq!(result.overtime_s, 60);
        assert_eq!(result.remaining_s, -60);
        assert_eq!(result.remaining_percentage_of_expected_time, 0.0);
    }

    #[test]
    fn test_exactly_on_budget_is_not_overtime() {
        let state = started(Some(300));
        let result = compute_current_page_timers(Some(&state), false, T0 + 300_000).unwrap();
        assert!(!result.is_overtime);
        assert_eq!(result.remaining_s, 0);
        assert_eq!(result.overtime_s, 0);
    }

    #[test]
    fn test_remaining_percentage() {
        let state = started(Some(600));
        let result = compute_current_page_timers(Some(&state), false, T0 + 150_000).unwrap();
        assert_eq!(result.remaining_percentage_of_expected_time, 75.0);
    }

    #[test]
    fn test_zero_budget_percentage_is_defined() {
        let state = started(Some(0));
        let at_start = compute_current_page_timers(Some(&state), false, T0).unwrap();
        assert_eq!(at_start.remaining_percentage_of_expected_time, 100.0);
        assert!(!at_start.is_overtime);

        let later = compute_current_page_timers(Some(&state), false, T0 + 1_000).unwrap();
        assert_eq!(later.remaining_percentage_of_expected_time, 0.0);
        assert!(later.is_overtime);
        assert_eq!(later.overtime_s, 1);
    }

    #[test]
    fn test_missing_budget_never_goes_overtime() {
        let state = started(None);
        let result = compute_current_page_timers(Some(&state), false, T0 + 9_000_000).unwrap();
        assert_eq!(result.elapsed_s, 9_000);
        assert!(!result.is_overtime);
        assert_eq!(result.remaining_s, 0);
        assert_eq!(result.overtime_s, 0);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let state = PageTimerState {
            time_last_paused: Some(T0 + 20_000),
            time_previously_spent_s: Some(12),
            time_spent_paused_s: 3,
            ..started(Some(120))
        };
        for is_paused in [true, false] {
            let first = compute_current_page_timers(Some(&state), is_paused, T0 + 50_000);
            let second = compute_current_page_timers(Some(&state), is_paused, T0 + 50_000);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_result_serializes_with_camel_case_names() {
        let state = started(Some(60));
        let result = compute_current_page_timers(Some(&state), false, T0 + 10_000).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["elapsedS"], 10);
        assert_eq!(json["remainingS"], 50);
        assert_eq!(json["overtimeS"], -50);
        assert_eq!(json["isOvertime"], false);
        assert!(json.get("remainingPercentageOfExpectedTime").is_some());
    }
}
