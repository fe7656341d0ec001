//! Plain-text rendering of [`UiState`] for terminals.

use crate::{
    restaurants::{Restaurant, Restaurants},
    state::{UiState, View},
};

pub const HEADING: &str = "Nearby Restaurants";
pub const LOCATION_PROMPT: &str = "[ Get My Location ]";
pub const LOADING_MESSAGE: &str = "Loading restaurants...";
pub const EMPTY_MESSAGE: &str = "No restaurants found nearby.";

const CARD_WIDTH: usize = 34;
const CARD_GAP: &str = "  ";

/// Render the full screen for a terminal `width` columns wide.
pub fn render(state: &UiState, width: usize) -> String {
    let mut out = vec![HEADING.to_string(), "=".repeat(HEADING.len())];
    if let Some(error) = state.error.as_deref() {
        out.push(format!("Error: {error}"));
    }
    if state.location_prompt_visible() {
        out.push(LOCATION_PROMPT.to_string());
    }
    match state.view() {
        View::Loading => out.push(LOADING_MESSAGE.to_string()),
        View::Restaurants(restaurants) => out.extend(grid(restaurants, width)),
        View::Empty => out.push(EMPTY_MESSAGE.to_string()),
        // already shown above
        View::Error(_) => {}
    }
    out.join("\n")
}

/// Number of cards per row; always at least one.
pub fn columns(width: usize) -> usize {
    ((width + CARD_GAP.len()) / (CARD_WIDTH + CARD_GAP.len())).max(1)
}

fn grid(restaurants: &Restaurants, width: usize) -> Vec<String> {
    let cards = restaurants.iter().map(card).collect::<Vec<_>>();
    let mut lines = Vec::new();
    for row in cards.chunks(columns(width)) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            let line = row
                .iter()
                .map(|card| {
                    let cell = card.get(i).map(String::as_str).unwrap_or("");
                    format!("{cell:<CARD_WIDTH$}")
                })
                .collect::<Vec<_>>()
                .join(CARD_GAP);
            lines.push(line.trim_end().to_string());
        }
    }
    lines
}

fn card(restaurant: &Restaurant) -> Vec<String> {
    let name = if restaurant.name.is_empty() {
        "(unnamed)"
    } else {
        restaurant.name.as_str()
    };
    let photo = restaurant.first_photo().unwrap_or("(no photo)");
    [
        name.to_string(),
        restaurant.address.formatted(),
        photo.to_string(),
    ]
    .iter()
    .map(|line| truncate(line, CARD_WIDTH))
    .collect()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut = text.chars().take(width - 1).collect::<String>();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geolocation::Coordinates, restaurants::Address};

    fn restaurant(name: &str, photo: Option<&str>) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            address: Address {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zipcode: "62701".to_string(),
            },
            photos: photo.map(|p| vec![p.to_string()]).unwrap_or_default(),
        }
    }

    #[test]
    fn initial_screen_offers_location() {
        let screen = render(&UiState::default(), 80);
        assert!(screen.starts_with(HEADING));
        assert!(screen.contains(LOCATION_PROMPT));
        assert!(screen.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn loading_screen() {
        let state = UiState {
            location: Some(Coordinates::new(1.0, 2.0)),
            is_loading: true,
            ..UiState::default()
        };
        let screen = render(&state, 80);
        assert!(screen.contains(LOADING_MESSAGE));
        assert!(!screen.contains(LOCATION_PROMPT));
    }

    #[test]
    fn error_screen_hides_prompt() {
        let state = UiState {
            error: Some("rate limited".to_string()),
            ..UiState::default()
        };
        let screen = render(&state, 80);
        assert!(screen.contains("Error: rate limited"));
        assert!(!screen.contains(LOCATION_PROMPT));
        assert!(!screen.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn grid_wraps_to_width() {
        let state = UiState {
            location: Some(Coordinates::new(1.0, 2.0)),
            restaurants: Restaurants::from(vec![
                restaurant("A", Some("https://img.test/a.jpg")),
                restaurant("B", None),
                restaurant("C", None),
            ]),
            ..UiState::default()
        };

        let screen = render(&state, 80);

        // two cards per row at 80 columns, then a blank line, then the third
        let lines = screen.lines().collect::<Vec<_>>();
        assert!(lines[2].starts_with("A "));
        assert!(lines[2].ends_with('B'));
        assert!(lines[3].contains("1 Main St, Springfield, IL 62701"));
        assert!(lines[4].starts_with("https://img.test/a.jpg"));
        assert!(lines[4].ends_with("(no photo)"));
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "C");
    }

    #[test]
    fn narrow_terminal_gets_one_column() {
        assert_eq!(columns(0), 1);
        assert_eq!(columns(20), 1);
        assert_eq!(columns(70), 2);
        assert_eq!(columns(106), 3);
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "X".repeat(50);
        let lines = card(&restaurant(&long, None));
        assert_eq!(lines[0].chars().count(), CARD_WIDTH);
        assert!(lines[0].ends_with('…'));
    }
}
