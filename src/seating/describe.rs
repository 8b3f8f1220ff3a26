use super::factors::ScoreFactors;

const CLOSE: f64 = 0.3;
const FAR: f64 = 0.7;

/// Rule-based summary of a seat's normalized factors.
///
/// Phrases are emitted in a fixed order: natural light, bathroom access, then
/// (only when neither of those fired) proximity to the reference seat.
pub fn describe(n: &ScoreFactors, reference_label: &str) -> String {
    let natural_light = n.to_left_wall < CLOSE || n.to_north_wall < CLOSE;
    let bathroom = n.to_top_right_corner < CLOSE || n.to_bottom_middle < CLOSE;
    let close_to_ref = n.to_reference < CLOSE;
    let far_from_ref = n.to_reference > FAR;

    let mut parts: Vec<String> = Vec::new();

    if natural_light {
        parts.push(if close_to_ref {
            format!("Natural light, but close to {}", reference_label)
        } else if far_from_ref {
            format!("Natural light, far from {}", reference_label)
        } else {
            "Natural light".to_string()
        });
    }

    if bathroom {
        parts.push(if far_from_ref {
            format!("Easy bathroom access, far from {}", reference_label)
        } else if close_to_ref {
            format!("Easy bathroom access, but close to {}", reference_label)
        } else {
            "Easy bathroom access".to_string()
        });
    }

    if !natural_light && !bathroom {
        if far_from_ref {
            parts.push(format!("Far from {}", reference_label));
        } else if close_to_ref {
            parts.push(format!("Close to {}", reference_label));
        }
    }

    if parts.is_empty() {
        "Standard seat".to_string()
    } else {
        parts.join(", ")
    }
}

/// Title-cases the lookup name for use in descriptions ("vinesh" -> "Vinesh").
pub fn reference_label(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
