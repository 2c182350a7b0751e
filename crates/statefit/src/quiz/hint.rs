use super::Question;

/// One-line size hint for the player, from the question's area ratio.
pub fn hint(question: &Question<'_>) -> String {
    let a = &question.state_a.name;
    let b = &question.state_b.name;
    if question.area_ratio < 0.3 {
        format!("{a} is much smaller than {b}")
    } else if question.area_ratio > 1.5 {
        format!("{a} is larger than {b}")
    } else {
        "The states are relatively similar in size. Try rotating to find the best fit!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Region;
    use crate::geom2::Polygon;
    use crate::quiz::Selection;

    fn question<'a>(a: &'a Region, b: &'a Region, ratio: f64) -> Question<'a> {
        Question {
            state_a: a,
            state_b: b,
            correct_answer: true,
            area_ratio: ratio,
            rotation: 0.0,
            selection: Selection::InBand,
        }
    }

    #[test]
    fn hint_depends_on_ratio() {
        let small = Region::new("Small", "SS", Polygon::rect(0.0, 0.0, 1.0, 1.0), 1.0);
        let large = Region::new("Large", "LS", Polygon::rect(0.0, 0.0, 5.0, 5.0), 25.0);
        assert_eq!(
            hint(&question(&small, &large, 0.04)),
            "Small is much smaller than Large"
        );
        assert_eq!(hint(&question(&large, &small, 25.0)), "Large is larger than Small");
        assert!(hint(&question(&small, &small, 1.0)).contains("similar in size"));
    }
}
