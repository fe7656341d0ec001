use serde::Serialize;

use crate::{geolocation::Coordinates, restaurants::Restaurants};

/// Everything the renderer needs. Starts empty at mount.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UiState {
    pub restaurants: Restaurants,
    pub location: Option<Coordinates>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// The one thing the main panel shows.
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    Restaurants(&'a Restaurants),
    Empty,
}

impl UiState {
    pub fn view(&self) -> View<'_> {
        if self.is_loading {
            View::Loading
        } else if let Some(error) = self.error.as_deref() {
            View::Error(error)
        } else if !self.restaurants.is_empty() {
            View::Restaurants(&self.restaurants)
        } else {
            View::Empty
        }
    }

    /// The "Get My Location" control is offered only while no position is
    /// held and no error is showing. After a failure the control stays hidden.
    pub fn location_prompt_visible(&self) -> bool {
        self.location.is_none() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurants::Restaurant;

    #[test]
    fn initial_state_is_empty_with_prompt() {
        let state = UiState::default();
        assert_eq!(state.view(), View::Empty);
        assert!(state.location_prompt_visible());
    }

    #[test]
    fn loading_wins_over_everything() {
        let state = UiState {
            restaurants: Restaurants::from(vec![Restaurant::default()]),
            is_loading: true,
            error: Some("boom".to_string()),
            ..UiState::default()
        };
        assert_eq!(state.view(), View::Loading);
    }

    #[test]
    fn error_hides_prompt() {
        let state = UiState {
            error: Some("Failed to get your location. Please try again.".to_string()),
            ..UiState::default()
        };
        assert!(!state.location_prompt_visible());
        assert_eq!(
            state.view(),
            View::Error("Failed to get your location. Please try again.")
        );
    }

    #[test]
    fn location_hides_prompt() {
        let state = UiState {
            location: Some(Coordinates::new(1.0, 2.0)),
            ..UiState::default()
        };
        assert!(!state.location_prompt_visible());
    }

    #[test]
    fn restaurants_view() {
        let state = UiState {
            restaurants: Restaurants::from(vec![Restaurant::default()]),
            ..UiState::default()
        };
        assert!(matches!(state.view(), View::Restaurants(list) if list.len() == 1));
    }
}
