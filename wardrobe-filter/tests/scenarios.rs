//! 示例衣橱与推荐搭配上的浏览场景

use wardrobe_common::{Catalog, Category, Color, FacetField, Item, Pattern, Season};
use wardrobe_filter::{
    project, FacetIndex, FilterController, FilterKey, FilterParams, ProjectionOutcome, Selection, SortOrder,
    ViewParams, WardrobeFilter,
};

fn load_catalog() -> Catalog {
    Catalog::from_json(include_str!("fixtures/wardrobe.json")).expect("fixture catalog should parse")
}

fn record(id: &str, category: Category, color: Color) -> Item {
    Item {
        id: id.to_string(),
        name: format!("Item {id}"),
        description: String::new(),
        category,
        color,
        pattern: Pattern::Solid,
        seasons: Vec::new(),
        occasions: Vec::new(),
        gender: None,
        favorite: false,
        image_url: None,
        date_added: None,
    }
}

fn two_blue_items() -> Vec<Item> {
    vec![record("1", Category::Tops, Color::Blue), record("2", Category::Bottoms, Color::Blue)]
}

#[test]
fn color_filter_keeps_both_blue_items_in_order() {
    let items = two_blue_items();
    let mut controller = FilterController::new();
    controller.set_field(FacetField::Color, Selection::Value(Color::Blue.into()));

    assert_eq!(project(&items, controller.state()).ids(), vec!["1", "2"]);
}

#[test]
fn category_and_color_filters_combine() {
    let items = two_blue_items();
    let mut controller = FilterController::new();
    controller.set_field(FacetField::Category, Selection::Value(Category::Tops.into()));
    controller.set_field(FacetField::Color, Selection::Value(Color::Blue.into()));

    assert_eq!(project(&items, controller.state()).ids(), vec!["1"]);
}

#[test]
fn unmatched_category_signals_no_matches() {
    let items = two_blue_items();
    let mut controller = FilterController::new();
    controller.set_field(FacetField::Category, Selection::Value(Category::Outerwear.into()));

    let projection = project(&items, controller.state());
    assert!(projection.is_empty());
    assert_eq!(projection.collection_size(), 2);
    assert_eq!(projection.outcome(), ProjectionOutcome::NoMatches);

    // 清除筛选后恢复完整集合
    controller.clear_all();
    assert!(controller.active_filters().is_empty());
    assert_eq!(project(&items, controller.state()).ids(), vec!["1", "2"]);
}

#[test]
fn search_term_matches_case_insensitively() {
    let catalog = load_catalog();
    let mut controller = FilterController::new();
    controller.set_search_term("jean");

    assert_eq!(project(&catalog.items, controller.state()).ids(), vec!["3"]);

    controller.set_search_term("JEAN");
    assert_eq!(project(&catalog.items, controller.state()).ids(), vec!["3"]);
}

#[test]
fn winter_includes_all_season_items() {
    let catalog = load_catalog();
    let mut controller = FilterController::new();
    controller.set_field(FacetField::Season, Selection::Value(Season::Winter.into()));

    assert_eq!(project(&catalog.items, controller.state()).ids(), vec!["3", "4", "5", "6"]);
}

#[test]
fn search_matches_descriptions_and_categories() {
    let catalog = load_catalog();
    let mut controller = FilterController::new();

    controller.set_search_term("layering");
    assert_eq!(project(&catalog.items, controller.state()).ids(), vec!["2", "5"]);

    controller.set_search_term("  bottoms ");
    assert_eq!(project(&catalog.items, controller.state()).ids(), vec!["3", "6"]);
}

#[test]
fn facet_index_lists_wardrobe_colors_and_counts() {
    let index = FacetIndex::new(load_catalog().items);
    let colors: Vec<&str> = index.all_values(FacetField::Color).iter().map(|v| v.label()).collect();
    assert_eq!(colors, vec!["Blue", "White", "Black", "Red", "Beige", "Navy"]);

    let tops: usize = index.count(Category::Tops.into());
    assert_eq!(tops, 3);
}

#[test]
fn outfit_suggestions_filter_by_style_scheme_and_gender() {
    let filter = WardrobeFilter::new(load_catalog()).expect("unique ids");

    let params = FilterParams::from_json(r#"{ "filters": { "colorScheme": "pastel" } }"#).unwrap();
    let result = filter.filter_outfits(&params);
    let ids: Vec<&str> = result.records.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);

    let params = FilterParams::from_json(r#"{ "filters": { "season": "Winter", "gender": "male" } }"#).unwrap();
    let result = filter.filter_outfits(&params);
    let ids: Vec<&str> = result.records.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);

    let params = FilterParams::from_json(r#"{ "search_term": "client" }"#).unwrap();
    assert_eq!(filter.filter_outfits(&params).total, 1);
}

#[test]
fn wardrobe_page_sorts_and_pages_matches() {
    let filter = WardrobeFilter::new(load_catalog()).expect("unique ids");
    let params = FilterParams {
        view: ViewParams { sort: SortOrder::Newest, page: Some(1), limit: Some(2) },
        ..Default::default()
    };

    let result = filter.filter_items(&params);
    let ids: Vec<&str> = result.records.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(result.total, 6);
    assert_eq!(result.total_pages, 3);
    assert!(result.active_filters.is_empty());
}

#[test]
fn unknown_fields_and_values_do_not_fail() {
    let filter = WardrobeFilter::new(load_catalog()).expect("unique ids");
    let params = FilterParams::from_json(r#"{ "filters": { "fabric": "linen", "color": "Teal" } }"#).unwrap();

    let controller = params.to_controller();
    assert!(!controller.active_filters().contains(&FilterKey::Field(FacetField::Color)));

    let result = filter.filter_items(&params);
    assert_eq!(result.total, 6);
    assert_eq!(result.outcome, ProjectionOutcome::Matches);
}

#[test]
fn outfit_suggestions_sort_by_score() {
    let filter = WardrobeFilter::new(load_catalog()).expect("unique ids");
    let params = FilterParams::from_json(r#"{ "sort": "score" }"#).unwrap();

    let result = filter.filter_outfits(&params);
    let ids: Vec<&str> = result.records.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);
}

#[test]
fn all_seasons_option_narrows_to_all_season_items() {
    let filter = WardrobeFilter::new(load_catalog()).expect("unique ids");
    let key = filter
        .item_options("season")
        .into_iter()
        .find(|option| option.label == "All Seasons")
        .map(|option| option.key)
        .expect("fixture has all-season items");

    let params = FilterParams::from_json(&format!(r#"{{ "filters": {{ "season": "{key}" }} }}"#)).unwrap();
    let result = filter.filter_items(&params);
    let ids: Vec<&str> = result.records.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "6"]);
    assert_eq!(result.active_filters, vec!["season"]);
}
