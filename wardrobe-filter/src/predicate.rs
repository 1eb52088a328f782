//! 谓词求值：判断单条记录是否满足当前筛选状态。
//!
//! 整体结果是所有字段约束与关键词约束的逻辑与。

use wardrobe_common::FacetValue;

use crate::facet::{FacetValues, Faceted};
use crate::state::FilterState;

/// 记录是否满足筛选状态
pub fn matches<T: Faceted + ?Sized>(record: &T, state: &FilterState) -> bool {
    state.constraints().all(|wanted| field_matches(record, wanted))
        && search_matches(record, state.search_needle())
}

/// 单个字段约束
pub fn field_matches<T: Faceted + ?Sized>(record: &T, wanted: FacetValue) -> bool {
    let field = wanted.field();
    let wildcard = field.wildcard();

    match record.facet(field) {
        FacetValues::Unsupported => true,
        FacetValues::Missing => false,
        FacetValues::One(value) => value == wanted || wildcard == Some(value),
        FacetValues::Many(values) => {
            values.contains(&wanted) || wildcard.is_some_and(|w| values.contains(&w))
        }
    }
}

/// 关键词约束；`needle` 需已去除首尾空白并转为小写
pub fn search_matches<T: Faceted + ?Sized>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FilterController, Selection};
    use crate::test_support::{item, outfit};
    use wardrobe_common::{Category, Color, FacetField, GenderCategory, Occasion, Season, Style};

    fn state_with(values: &[FacetValue]) -> FilterState {
        let mut controller = FilterController::new();
        for value in values {
            controller.set_field(value.field(), Selection::Value(*value));
        }
        controller.into_state()
    }

    #[test]
    fn empty_state_matches_everything() {
        let shirt = item("1", "Shirt", Category::Tops, Color::Red, &[]);
        assert!(matches(&shirt, &FilterState::default()));
    }

    #[test]
    fn single_valued_field_requires_equality() {
        let shirt = item("1", "Shirt", Category::Tops, Color::Red, &[]);
        assert!(matches(&shirt, &state_with(&[Color::Red.into()])));
        assert!(!matches(&shirt, &state_with(&[Color::Blue.into()])));
    }

    #[test]
    fn multi_valued_field_requires_membership() {
        let jacket = item("1", "Jacket", Category::Outerwear, Color::Blue, &[Season::Spring, Season::Fall]);
        assert!(matches(&jacket, &state_with(&[Season::Fall.into()])));
        assert!(!matches(&jacket, &state_with(&[Season::Winter.into()])));
    }

    #[test]
    fn all_seasons_item_matches_every_season() {
        let jeans = item("3", "Black Jeans", Category::Bottoms, Color::Black, &[Season::All]);
        for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
            assert!(matches(&jeans, &state_with(&[season.into()])));
        }
    }

    #[test]
    fn wildcard_does_not_extend_to_other_fields() {
        let mut shirt = item("1", "Shirt", Category::Tops, Color::Multi, &[]);
        shirt.occasions = vec![Occasion::Everyday];
        assert!(!matches(&shirt, &state_with(&[Color::Red.into()])));
        assert!(!matches(&shirt, &state_with(&[Occasion::Party.into()])));
    }

    #[test]
    fn constraint_on_missing_value_fails() {
        let shirt = item("1", "Shirt", Category::Tops, Color::Red, &[]);
        assert!(!matches(&shirt, &state_with(&[GenderCategory::Female.into()])));
    }

    #[test]
    fn constraint_on_unsupported_field_is_ignored() {
        let shirt = item("1", "Shirt", Category::Tops, Color::Red, &[]);
        assert!(matches(&shirt, &state_with(&[Style::Vintage.into()])));

        let look = outfit("1", "Casual Friday", Occasion::Casual, Season::Spring, Style::Casual);
        assert!(matches(&look, &state_with(&[Color::Red.into()])));
        assert!(!matches(&look, &state_with(&[Style::Business.into()])));
    }

    #[test]
    fn all_season_outfit_matches_every_season() {
        let look = outfit("2", "Business Meeting", Occasion::Formal, Season::All, Style::Business);
        assert!(matches(&look, &state_with(&[Season::Winter.into()])));
        assert!(field_matches(&look, FacetValue::Season(Season::All)));
    }

    #[test]
    fn search_covers_name_category_and_description() {
        let mut jeans = item("3", "Black Jeans", Category::Bottoms, Color::Black, &[]);
        jeans.description = "Slim fit with stretch".to_string();

        assert!(search_matches(&jeans, "jean"));
        assert!(search_matches(&jeans, "bottom"));
        assert!(search_matches(&jeans, "stretch"));
        assert!(!search_matches(&jeans, "jacket"));
        assert!(search_matches(&jeans, ""));
    }

    #[test]
    fn search_and_fields_combine_with_and() {
        let jeans = item("3", "Black Jeans", Category::Bottoms, Color::Black, &[]);
        let mut controller = FilterController::new();
        controller.set_search_term("  JEAN ");
        assert!(matches(&jeans, controller.state()));

        controller.set_field(FacetField::Color, Selection::Value(Color::Blue.into()));
        assert!(!matches(&jeans, controller.state()));
    }
}
