//! End-to-end tests for tab value/layout operations

use pretty_assertions::assert_eq;
use tally_sheets::prelude::*;

#[test]
fn test_set_value_by_address_and_indices() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    tab.set_value_at(0, 0, "one").unwrap();
    assert_eq!(tab.value_at(0, 0), "one");

    tab.set_value("B2", "two").unwrap();
    assert_eq!(tab.value("B2").unwrap(), "two");
    assert_eq!(tab.value_at(1, 1), "two");

    tab.set_value_styled_at(2, 2, "three", &CellStyle::center()).unwrap();
    assert_eq!(tab.value_at(2, 2), "three");
    assert_eq!(
        tab.style_at(2, 2).unwrap().align(),
        Some(HorizontalAlignment::Center)
    );
}

#[test]
fn test_malformed_addresses_are_fatal() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    assert!(tab.set_value("17", "x").is_err());
    assert!(tab.set_value("B", "x").is_err());
    assert!(tab.set_value("", "x").is_err());
    assert!(tab.value("!!").is_err());
}

#[test]
fn test_value_coercion_through_the_tab() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    tab.set_value("A1", "=B1*2").unwrap();
    assert_eq!(
        tab.cell_value("A1").unwrap(),
        CellValue::Formula("B1*2".to_string())
    );

    tab.set_value("A2", f64::NAN).unwrap();
    assert_eq!(tab.cell_value("A2").unwrap(), CellValue::String(String::new()));

    tab.set_value("A3", 7).unwrap();
    assert_eq!(tab.cell_value("A3").unwrap(), CellValue::Number(7.0));

    tab.set_value("A4", false).unwrap();
    assert_eq!(tab.cell_value("A4").unwrap(), CellValue::Boolean(false));

    // clearing with no content
    tab.set_value("A3", Option::<&str>::None).unwrap();
    assert_eq!(tab.cell_value("A3").unwrap(), CellValue::Empty);
}

#[test]
fn test_cell_address_formatting() {
    assert_eq!(cell_address(0, 0), "A1");
    assert_eq!(cell_address(0, 1), "B1");
    assert_eq!(cell_address(1, 0), "A2");
    assert_eq!(cell_address(26, 26), "AA27");
    assert_eq!(cell_address(26, 27), "AB27");
}

#[test]
fn test_set_style_on_block_of_cells() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    tab.set_style_block(1, 2, 2, 3, &CellStyle::right()).unwrap();

    for row in 1..=2 {
        for col in 2..=3 {
            assert_eq!(tab.style_at(row, col), Some(&CellStyle::right()));
        }
    }
    // surrounding perimeter is untouched
    assert_eq!(tab.style_at(0, 2), None);
    assert_eq!(tab.style_at(1, 1), None);
    assert_eq!(tab.style_at(3, 3), None);
}

#[test]
fn test_merge_cells_writes_anchor_and_styles_region() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    tab.merge_cells("B2", "C3", "one big cell", &CellStyle::center())
        .unwrap();

    assert_eq!(tab.value("B2").unwrap(), "one big cell");
    for row in 1..=2 {
        for col in 1..=2 {
            assert_eq!(tab.style_at(row, col), Some(&CellStyle::center()));
        }
    }

    let regions = book.workbook().worksheet(0).unwrap().merged_regions().to_vec();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].to_a1_string(), "B2:C3");
    assert_eq!(regions[0].cell_count(), 4);
}

#[test]
fn test_print_down_and_across_return_next_index() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    let next_row = tab
        .print_down("B2", Some(&CellStyle::left()), ["one", "two", "three"])
        .unwrap();
    assert_eq!(next_row, 4);
    assert_eq!(tab.value("B2").unwrap(), "one");
    assert_eq!(tab.value("B4").unwrap(), "three");
    assert_eq!(
        tab.style("B3").unwrap().unwrap().align(),
        Some(HorizontalAlignment::Left)
    );

    let next_col = tab.print_across_at(0, 0, None, [10, 20]).unwrap();
    assert_eq!(next_col, 2);
    assert_eq!(tab.cell_value_at(0, 1), CellValue::Number(20.0));
    assert_eq!(tab.style_at(0, 0), None);
}

#[test]
fn test_surround_border_paints_only_the_perimeter() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    tab.set_surround_border("B2", "D4", BorderLineStyle::Medium).unwrap();

    // corners get two edges
    let top_left = tab.style("B2").unwrap().unwrap();
    assert_eq!(top_left.top_border(), Some(BorderLineStyle::Medium));
    assert_eq!(top_left.left_border(), Some(BorderLineStyle::Medium));
    assert_eq!(top_left.bottom_border(), None);

    // edge cells get one
    let top_middle = tab.style("C2").unwrap().unwrap();
    assert_eq!(top_middle.top_border(), Some(BorderLineStyle::Medium));
    assert_eq!(top_middle.left_border(), None);

    // the interior is untouched
    assert_eq!(tab.style("C3").unwrap(), None);
}

#[test]
fn test_borders_layer_over_existing_styles() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    tab.set_value_styled("B2", "x", &CellStyle::center().with_bold(true))
        .unwrap();
    tab.set_top_border(1, 1, 1, BorderLineStyle::Thin).unwrap();

    let style = tab.style("B2").unwrap().unwrap();
    assert_eq!(style.top_border(), Some(BorderLineStyle::Thin));
    assert_eq!(style.bold(), Some(true));
    assert_eq!(style.align(), Some(HorizontalAlignment::Center));
}

#[test]
fn test_duplicate_tab_titles_rejected() {
    let mut book = Spreadsheet::new();
    book.create_tab("Summary").unwrap();

    let err = book.create_tab("Summary").unwrap_err();
    assert!(matches!(err, Error::DuplicateTabTitle(title) if title == "Summary"));

    assert!(book.tab("Summary").is_some());
    assert!(book.tab("Missing").is_none());
    assert_eq!(book.tab_count(), 1);
}

#[test]
fn test_pictures_pass_through_to_the_document() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();

    tab.add_picture("C3", PictureFormat::Png, vec![0x89, 0x50, 0x4E, 0x47])
        .unwrap();

    let pictures = book.workbook().worksheet(0).unwrap().pictures();
    assert_eq!(pictures.len(), 1);
    assert_eq!((pictures[0].row, pictures[0].col), (2, 2));
    assert_eq!(pictures[0].format, PictureFormat::Png);
}

#[test]
fn test_reading_back_a_built_sheet() {
    let mut book = Spreadsheet::new();
    let mut tab = book.create_tab("Data").unwrap();
    tab.print_down("A1", None, ["alpha", "beta", "gamma"]).unwrap();
    tab.set_value("B1", 12.5).unwrap();

    let sheet = book.workbook().worksheet_by_name("Data").unwrap();
    let reader = SheetReader::new(sheet);
    assert_eq!(reader.read_down_until_blank("A1").unwrap(), vec!["alpha", "beta", "gamma"]);
    assert_eq!(reader.numeric_value("B1").unwrap(), 12.5);
    assert_eq!(reader.sheet_name(), "Data");
}
