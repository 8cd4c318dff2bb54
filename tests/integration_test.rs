mod utils;

use fb2_reader::config::{LayoutConfig, ReaderConfig};
use fb2_reader::input::{load_book, LoadError};
use fb2_reader::reading::{page_count, paginate, wrap_paragraphs, PageLayout, WrappedLine};
use tempfile::TempDir;
use unicode_width::UnicodeWidthStr;
use utils::{write_book, write_zipped_book};

const PARAGRAPHS: &[&str] = &[
    "ГЛАВА ПЕРВАЯ",
    "Все счастливые семьи похожи друг на друга, каждая несчастливая семья несчастлива <emphasis>по-своему</emphasis>.",
    "Всё смешалось в доме Облонских. Жена узнала, что муж был в связи с бывшею в их доме француженкою-гувернанткой.",
    "ГЛАВА ВТОРАЯ",
    "Степан Аркадьич был человек правдивый в отношении к себе самому.",
];

#[test]
fn end_to_end_plain_book_to_pages() {
    let dir = TempDir::new().unwrap();
    let path = write_book(dir.path(), "anna.fb2", PARAGRAPHS);

    let book = load_book(&path, 80).expect("Should load book successfully");
    assert_eq!(book.id, "anna.fb2");
    assert_eq!(book.paragraphs.len(), 5);
    assert!(book.paragraphs[1].text().ends_with("по-своему."));

    let config = ReaderConfig::default();
    let layout = PageLayout::from_terminal(40, 6, &config.layout).unwrap();
    let lines = wrap_paragraphs(&book.paragraphs, layout.column_width as usize, config.wrap.indent);
    assert!(lines.iter().all(|l| l.text.width() <= layout.column_width as usize));

    let pages = paginate(lines.clone(), layout.lines_per_column as usize);
    assert_eq!(pages.len(), page_count(lines.len(), layout.lines_per_column as usize));
    let flattened: Vec<WrappedLine> = pages.iter().flat_map(|p| p.lines().cloned()).collect();
    assert_eq!(flattened, lines);

    let headings: Vec<&str> = lines
        .iter()
        .filter(|l| l.is_heading)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(headings, vec!["ГЛАВА ПЕРВАЯ", "ГЛАВА ВТОРАЯ"]);
}

#[test]
fn end_to_end_zipped_book_matches_plain() {
    let dir = TempDir::new().unwrap();
    let plain = load_book(&write_book(dir.path(), "anna.fb2", PARAGRAPHS), 80).unwrap();
    let zipped = load_book(&write_zipped_book(dir.path(), "anna.fb2.zip", PARAGRAPHS), 80).unwrap();

    assert_eq!(zipped.id, "anna.fb2.zip");
    assert_eq!(zipped.paragraphs, plain.paragraphs);
}

#[test]
fn end_to_end_empty_book_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_book(dir.path(), "empty.fb2", &[]);
    assert!(matches!(load_book(&path, 80), Err(LoadError::ExtractionEmpty(_))));
}

#[test]
fn end_to_end_layout_follows_terminal_size() {
    let config = LayoutConfig::default();
    let sizes = vec![(80, 24, 37, 22), (120, 40, 57, 38), (40, 5, 17, 3)];
    for (width, height, column_width, lines_per_column) in sizes {
        let layout = PageLayout::from_terminal(width, height, &config).unwrap();
        assert_eq!(
            (layout.column_width, layout.lines_per_column),
            (column_width, lines_per_column),
            "terminal {}x{}",
            width,
            height
        );
    }
}
