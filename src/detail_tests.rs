//! Tests for the show detail state machine and presentation helpers

#[cfg(test)]
mod tests {
    use crate::detail::*;
    use crate::models::{Episode, EpisodeFile, Season, Show};

    fn episode(number: u32, title: &str) -> Episode {
        Episode {
            episode: number,
            title: title.to_string(),
            description: None,
            image: None,
            date: None,
            file: None,
        }
    }

    fn season(number: u32, episodes: Vec<Episode>) -> Season {
        Season {
            season: number,
            title: None,
            description: None,
            image: None,
            episodes,
        }
    }

    fn show(seasons: Vec<Season>) -> Show {
        Show {
            title: "Night Static".to_string(),
            description: "A serialized mystery.".to_string(),
            image: "https://cdn.example.com/cover.jpg".to_string(),
            genres: vec![7],
            updated: "2022-11-03T07:00:00.000Z".to_string(),
            episodes: seasons.iter().map(|s| s.episodes.len() as u32).sum(),
            seasons,
        }
    }

    #[test]
    fn test_open_starts_loading_on_first_season() {
        let view = DetailView::open("10716");
        assert_eq!(view.show_id, "10716");
        assert_eq!(view.state, ShowState::Loading);
        assert_eq!(view.selected_season, 0);
        assert!(view.loading());
    }

    #[test]
    fn test_finish_with_payload_loads() {
        let mut view = DetailView::open("1");
        let payload = show(vec![season(1, vec![episode(1, "Pilot")])]);
        assert!(view.finish("1", Ok(Some(payload.clone()))));
        assert_eq!(view.state, ShowState::Loaded(payload));
        assert!(!view.loading());
    }

    #[test]
    fn test_finish_with_empty_payload_is_not_found() {
        let mut view = DetailView::open("1");
        assert!(view.finish("1", Ok(None)));
        assert_eq!(view.state, ShowState::NotFound);
    }

    #[test]
    fn test_finish_with_failure_is_error() {
        let mut view = DetailView::open("1");
        assert!(view.finish("1", Err("HTTP 404".to_string())));
        assert_eq!(view.state, ShowState::Error("HTTP 404".to_string()));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut view = DetailView::open("2");
        // Completion for the previously opened id arrives late
        assert!(!view.finish("1", Ok(Some(show(vec![])))));
        assert_eq!(view.state, ShowState::Loading);

        assert!(!view.finish("1", Err("HTTP 500".to_string())));
        assert_eq!(view.state, ShowState::Loading);
    }

    #[test]
    fn test_reopening_resets_season_selection() {
        let mut view = DetailView::open("1");
        view.finish("1", Ok(Some(show(vec![season(1, vec![]), season(2, vec![])]))));
        view.select_season(1);
        assert_eq!(view.selected_season, 1);

        let view = DetailView::open("2");
        assert_eq!(view.selected_season, 0);
    }

    #[test]
    fn test_season_selection_moves_the_rendered_block() {
        let data = show(vec![
            season(1, vec![episode(1, "Pilot")]),
            season(2, vec![episode(1, "Return")]),
        ]);
        let mut view = DetailView::open("1");
        view.finish("1", Ok(Some(data.clone())));

        view.select_season(1);
        let current = current_season(&data, view.selected_season).unwrap();
        assert_eq!(current.season, 2);
        assert_eq!(current.episodes[0].title, "Return");
    }

    #[test]
    fn test_current_season_handles_empty_and_out_of_range() {
        let empty = show(vec![]);
        assert!(current_season(&empty, 0).is_none());

        let one = show(vec![season(1, vec![])]);
        assert!(current_season(&one, 0).is_some());
        assert!(current_season(&one, 3).is_none());
    }

    #[test]
    fn test_truncate_blurb_boundary() {
        let exact: String = "a".repeat(120);
        assert_eq!(truncate_blurb(&exact), exact);

        let short = "brief";
        assert_eq!(truncate_blurb(short), "brief");

        let long: String = "b".repeat(121);
        let cut = truncate_blurb(&long);
        assert_eq!(cut.chars().count(), 123);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with(&"b".repeat(120)));
    }

    #[test]
    fn test_truncate_blurb_counts_characters_not_bytes() {
        let long: String = "é".repeat(121);
        let cut = truncate_blurb(&long);
        assert_eq!(cut.chars().count(), 123);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_format_minutes_rounds() {
        assert_eq!(format_minutes(90.0), "2 min");
        assert_eq!(format_minutes(3024.0), "50 min");
        assert_eq!(format_minutes(0.0), "0 min");
        assert_eq!(format_minutes(59.0), "1 min");
    }

    #[test]
    fn test_format_updated_long_form() {
        assert_eq!(format_updated("2022-11-03T07:00:00.000Z"), "November 3, 2022");
        // Unparseable stamps pass through untouched
        assert_eq!(format_updated("soonish"), "soonish");
    }

    #[test]
    fn test_format_episode_date() {
        assert_eq!(format_episode_date("2022-08-01T10:00:00.000Z"), "Aug 1, 2022");
        assert_eq!(format_episode_date("2022-08-01"), "Aug 1, 2022");
        assert_eq!(format_episode_date("last week"), "last week");
    }

    #[test]
    fn test_artwork_falls_back_up_the_chain() {
        let mut data = show(vec![season(1, vec![episode(1, "Pilot")])]);

        let s = &data.seasons[0];
        let ep = &s.episodes[0];
        assert_eq!(episode_artwork(ep, s, &data), Some("https://cdn.example.com/cover.jpg"));
        assert_eq!(season_artwork(s, &data), Some("https://cdn.example.com/cover.jpg"));

        data.seasons[0].image = Some("https://cdn.example.com/s1.jpg".to_string());
        let s = &data.seasons[0];
        assert_eq!(episode_artwork(&s.episodes[0], s, &data), Some("https://cdn.example.com/s1.jpg"));

        data.seasons[0].episodes[0].image = Some("https://cdn.example.com/e1.jpg".to_string());
        let s = &data.seasons[0];
        assert_eq!(episode_artwork(&s.episodes[0], s, &data), Some("https://cdn.example.com/e1.jpg"));
    }

    #[test]
    fn test_artwork_missing_everywhere() {
        let mut data = show(vec![season(1, vec![episode(1, "Pilot")])]);
        data.image = String::new();
        let s = &data.seasons[0];
        assert_eq!(season_artwork(s, &data), None);
        assert_eq!(episode_artwork(&s.episodes[0], s, &data), None);
    }

    #[test]
    fn test_season_heading_prefers_title() {
        let mut s = season(3, vec![]);
        assert_eq!(season_heading(&s), "Season 3");

        s.title = Some("The Reckoning".to_string());
        assert_eq!(season_heading(&s), "The Reckoning");

        s.title = Some("   ".to_string());
        assert_eq!(season_heading(&s), "Season 3");
    }

    #[test]
    fn test_episode_file_duration_feeds_minutes() {
        let file = EpisodeFile { duration: 3024.0 };
        assert_eq!(format_minutes(file.duration), "50 min");
    }
}
