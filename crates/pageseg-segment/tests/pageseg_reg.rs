//! Page segmentation regression test
//!
//! Runs the full two-level pipeline on synthetic pages and checks line and
//! word boundaries, ordering, original-page coordinates, crop round-trips,
//! and the degenerate cases.
//!
//! Run with:
//! ```
//! cargo test -p pageseg-segment --test pageseg_reg
//! ```

use pageseg_core::{Rect, Span};
use pageseg_segment::{PageSegmenter, SegmentError, SegmentOptions};
use pageseg_test::text_page;

fn default_segmenter() -> PageSegmenter {
    PageSegmenter::new(SegmentOptions::default())
}

#[test]
fn two_lines_with_words() {
    // Line 1: two ink blocks; line 2: one ink block lower on the page
    let page = text_page(
        100,
        60,
        &[
            Rect::new(10, 10, 8, 10),
            Rect::new(30, 10, 12, 10),
            Rect::new(50, 35, 6, 12),
        ],
    );
    let result = default_segmenter().segment(&page).unwrap();

    assert_eq!(result.width, 100);
    assert_eq!(result.height, 60);
    assert_eq!(result.lines.len(), 2);

    let l1 = &result.lines[0];
    assert_eq!(l1.index, 1);
    assert_eq!(l1.rows, Span::new_unchecked(10, 20));
    assert_eq!(l1.image.dimensions(), (100, 10));
    assert_eq!(l1.words.len(), 2);
    assert_eq!(l1.words[0].cols, Span::new_unchecked(10, 18));
    assert_eq!(l1.words[1].cols, Span::new_unchecked(30, 42));
    assert_eq!(l1.words[0].bounds, Rect::new(10, 10, 8, 10));
    assert_eq!(l1.words[1].bounds, Rect::new(30, 10, 12, 10));
    assert_eq!(l1.words[0].image.dimensions(), (8, 10));

    let l2 = &result.lines[1];
    assert_eq!(l2.index, 2);
    assert_eq!(l2.rows, Span::new_unchecked(35, 47));
    assert_eq!(l2.words.len(), 1);
    assert_eq!(l2.words[0].bounds, Rect::new(50, 35, 6, 12));

    // Word tags are 1-based and ordered
    assert_eq!(l1.words[0].line_index, 1);
    assert_eq!(l1.words[0].index, 1);
    assert_eq!(l1.words[1].index, 2);
    assert_eq!(l2.words[0].line_index, 2);
    assert_eq!(result.word_count(), 3);

    // Three disjoint ink blocks, three components
    assert_eq!(result.component_count, 3);
}

#[test]
fn artifact_naming_is_one_based() {
    let page = text_page(
        60,
        30,
        &[Rect::new(5, 5, 6, 6), Rect::new(20, 5, 6, 6)],
    );
    let result = default_segmenter().segment(&page).unwrap();
    let line = &result.lines[0];
    assert_eq!(line.file_name("page"), "page_line_1.png");
    assert_eq!(line.words[0].file_name("page"), "page_line_1_word_1.png");
    assert_eq!(line.words[1].file_name("page"), "page_line_1_word_2.png");
}

#[test]
fn all_background_page_yields_nothing() {
    let page = text_page(80, 40, &[]);
    let result = default_segmenter().segment(&page).unwrap();
    assert!(result.lines.is_empty());
    assert_eq!(result.word_count(), 0);
    assert_eq!(result.component_count, 0);
}

#[test]
fn ink_touching_page_edges_is_captured() {
    let page = text_page(
        50,
        40,
        &[Rect::new(10, 0, 10, 5), Rect::new(10, 34, 10, 6)],
    );
    let result = default_segmenter().segment(&page).unwrap();
    assert_eq!(result.lines.len(), 2);
    assert_eq!(result.lines[0].rows, Span::new_unchecked(0, 5));
    assert_eq!(result.lines[1].rows, Span::new_unchecked(34, 40));
}

#[test]
fn line_crops_round_trip_their_rows() {
    let page = text_page(
        64,
        48,
        &[Rect::new(8, 6, 20, 8), Rect::new(8, 30, 30, 10)],
    );
    let rgb = page.to_rgb8();
    let result = default_segmenter().segment(&page).unwrap();

    // Each crop reproduces exactly the page rows its span covers; the
    // inter-line gap rows are deliberately absent from the output.
    for line in &result.lines {
        for (crop_y, page_y) in line.rows.indices().enumerate() {
            for x in 0..rgb.width() {
                assert_eq!(
                    line.image.get_pixel(x, crop_y as u32),
                    rgb.get_pixel(x, page_y as u32),
                    "mismatch at x={x}, page row {page_y}"
                );
            }
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let page = text_page(
        90,
        50,
        &[
            Rect::new(5, 5, 10, 8),
            Rect::new(25, 5, 10, 8),
            Rect::new(5, 25, 40, 10),
        ],
    );
    let segmenter = default_segmenter();
    let a = segmenter.segment(&page).unwrap();
    let b = segmenter.segment(&page).unwrap();

    assert_eq!(a.component_count, b.component_count);
    assert_eq!(a.lines.len(), b.lines.len());
    for (la, lb) in a.lines.iter().zip(&b.lines) {
        assert_eq!(la.rows, lb.rows);
        let cols_a: Vec<_> = la.words.iter().map(|w| w.cols).collect();
        let cols_b: Vec<_> = lb.words.iter().map(|w| w.cols).collect();
        assert_eq!(cols_a, cols_b);
    }
}

#[test]
fn profile_floor_suppresses_speckle_columns() {
    // Two solid words with a single-pixel speckle column between them
    let page = text_page(
        40,
        10,
        &[
            Rect::new(2, 0, 6, 10),
            Rect::new(15, 4, 1, 1),
            Rect::new(20, 0, 10, 10),
        ],
    );

    let plain = default_segmenter().segment(&page).unwrap();
    assert_eq!(plain.lines[0].words.len(), 3);

    let tolerant = PageSegmenter::new(SegmentOptions {
        profile_floor: 1,
        ..SegmentOptions::default()
    })
    .segment(&page)
    .unwrap();
    assert_eq!(tolerant.lines[0].words.len(), 2);
}

#[test]
fn zero_area_image_is_rejected() {
    let page = image::DynamicImage::new_rgb8(0, 0);
    let err = default_segmenter().segment(&page).unwrap_err();
    assert!(matches!(
        err,
        SegmentError::Core(pageseg_core::Error::InvalidDimension { .. })
    ));
}

#[test]
fn missing_file_surfaces_image_load_error() {
    let err = default_segmenter()
        .segment_path("no/such/scan.png")
        .unwrap_err();
    match err {
        SegmentError::ImageLoad { path, .. } => assert!(path.contains("scan.png")),
        other => panic!("expected ImageLoad, got {other}"),
    }
}
