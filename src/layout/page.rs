//! Page layout through Taffy.
//!
//! The page is a column: header, controls row (search grows, cuisine select
//! fixed), card grid (row wrap), footer. In fullscreen the root is pinned to
//! the terminal height, the grid takes what is left and its overflow becomes
//! scrollable. Inline, the root grows to its content.

use taffy::{
    AlignContent, AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, LengthPercentage,
    LengthPercentageAuto, NodeId, Rect, Size, Style, TaffyTree,
};

use crate::error::Result;
use crate::types::ClipRect;

// =============================================================================
// CONSTANTS
// =============================================================================

pub const HEADER_HEIGHT: u16 = 3;
pub const CONTROLS_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const SELECT_WIDTH: u16 = 22;
pub const CARD_HEIGHT: u16 = 9;
pub const ROW_GAP: u16 = 1;
pub const COLUMN_GAP: u16 = 2;
/// Rows between the tops of two card rows.
pub const CARD_ROW_STRIDE: u16 = CARD_HEIGHT + ROW_GAP;
/// Left and right page padding.
pub const PAGE_PADDING_X: u16 = 2;
/// Blank rows above the controls, the grid and the footer.
pub const SECTION_SPACING: u16 = 1;

/// Grid columns for a terminal width.
///
/// One column below 64 cells, two below 100, three otherwise.
pub fn grid_columns(width: u16) -> u16 {
    match width {
        0..64 => 1,
        64..100 => 2,
        _ => 3,
    }
}

/// Width of one card for an inner page width.
pub fn card_width(inner_width: u16, columns: u16) -> u16 {
    let columns = columns.max(1);
    inner_width.saturating_sub(COLUMN_GAP * (columns - 1)) / columns
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Absolute cell rectangles for every part of the page.
///
/// Card rectangles are unscrolled; subtract the scroll offset when painting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub header: ClipRect,
    pub search: ClipRect,
    pub cuisine: ClipRect,
    pub grid: ClipRect,
    pub footer: ClipRect,
    pub columns: u16,
    pub cards: Vec<ClipRect>,
    /// Rows of card content below the grid's visible area.
    pub max_scroll: u16,
}

// =============================================================================
// STYLES
// =============================================================================

#[inline]
fn len(cells: u16) -> Dimension {
    Dimension::Length(f32::from(cells))
}

fn top_margin(cells: u16) -> Rect<LengthPercentageAuto> {
    Rect {
        left: LengthPercentageAuto::Length(0.0),
        right: LengthPercentageAuto::Length(0.0),
        top: LengthPercentageAuto::Length(f32::from(cells)),
        bottom: LengthPercentageAuto::Length(0.0),
    }
}

fn fixed_row(height: u16, margin_top: u16) -> Style {
    Style {
        display: Display::Flex,
        flex_shrink: 0.0,
        size: Size {
            width: Dimension::Auto,
            height: len(height),
        },
        margin: top_margin(margin_top),
        ..Default::default()
    }
}

fn grid_style(constrain_height: bool) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::Wrap,
        align_content: Some(AlignContent::FlexStart),
        gap: Size {
            width: LengthPercentage::Length(f32::from(COLUMN_GAP)),
            height: LengthPercentage::Length(f32::from(ROW_GAP)),
        },
        flex_grow: if constrain_height { 1.0 } else { 0.0 },
        flex_shrink: 1.0,
        min_size: Size {
            width: Dimension::Auto,
            height: len(0),
        },
        margin: top_margin(SECTION_SPACING),
        ..Default::default()
    }
}

fn card_style(width: u16) -> Style {
    Style {
        display: Display::Flex,
        flex_shrink: 0.0,
        size: Size {
            width: len(width),
            height: len(CARD_HEIGHT),
        },
        ..Default::default()
    }
}

// =============================================================================
// COMPUTE
// =============================================================================

#[inline]
fn cell(v: f32) -> u16 {
    v.round().clamp(0.0, f32::from(u16::MAX)) as u16
}

fn rect(tree: &TaffyTree<()>, node: NodeId, offset_x: u16, offset_y: u16) -> Result<ClipRect> {
    let layout = tree.layout(node)?;
    Ok(ClipRect::new(
        offset_x.saturating_add(cell(layout.location.x)),
        offset_y.saturating_add(cell(layout.location.y)),
        cell(layout.size.width),
        cell(layout.size.height),
    ))
}

/// Lay out the page for `card_count` cards.
///
/// `constrain_height` pins the page to `height` (fullscreen). Otherwise the
/// page is as tall as its content.
pub fn compute_page_layout(
    width: u16,
    height: u16,
    constrain_height: bool,
    card_count: usize,
) -> Result<PageLayout> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let columns = grid_columns(width);
    let inner_width = width.saturating_sub(PAGE_PADDING_X * 2);
    let card_w = card_width(inner_width, columns);

    let header = tree.new_leaf(fixed_row(HEADER_HEIGHT, 0))?;

    let search = tree.new_leaf(Style {
        flex_grow: 1.0,
        flex_shrink: 1.0,
        min_size: Size {
            width: len(0),
            height: Dimension::Auto,
        },
        size: Size {
            width: Dimension::Auto,
            height: len(CONTROLS_HEIGHT),
        },
        ..Default::default()
    })?;
    let cuisine = tree.new_leaf(Style {
        flex_shrink: 0.0,
        size: Size {
            width: len(SELECT_WIDTH.min(inner_width)),
            height: len(CONTROLS_HEIGHT),
        },
        ..Default::default()
    })?;
    let controls = tree.new_with_children(
        Style {
            flex_direction: FlexDirection::Row,
            gap: Size {
                width: LengthPercentage::Length(f32::from(COLUMN_GAP)),
                height: LengthPercentage::Length(0.0),
            },
            ..fixed_row(CONTROLS_HEIGHT, SECTION_SPACING)
        },
        &[search, cuisine],
    )?;

    let cards = (0..card_count)
        .map(|_| tree.new_leaf(card_style(card_w)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let grid = tree.new_with_children(grid_style(constrain_height), &cards)?;

    let footer = tree.new_leaf(fixed_row(FOOTER_HEIGHT, SECTION_SPACING))?;

    let root = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size {
                width: len(width),
                height: if constrain_height {
                    len(height)
                } else {
                    Dimension::Auto
                },
            },
            padding: Rect {
                left: LengthPercentage::Length(f32::from(PAGE_PADDING_X)),
                right: LengthPercentage::Length(f32::from(PAGE_PADDING_X)),
                top: LengthPercentage::Length(0.0),
                bottom: LengthPercentage::Length(0.0),
            },
            ..Default::default()
        },
        &[header, controls, grid, footer],
    )?;

    let available = Size {
        width: AvailableSpace::Definite(f32::from(width)),
        height: if constrain_height {
            AvailableSpace::Definite(f32::from(height))
        } else {
            AvailableSpace::MaxContent
        },
    };
    tree.compute_layout(root, available)?;

    let root_layout = tree.layout(root)?;
    let page_width = cell(root_layout.size.width);
    let page_height = cell(root_layout.size.height);

    let controls_rect = rect(&tree, controls, 0, 0)?;
    let grid_rect = rect(&tree, grid, 0, 0)?;
    let card_rects = cards
        .iter()
        .map(|&card| rect(&tree, card, grid_rect.x, grid_rect.y))
        .collect::<Result<Vec<_>>>()?;

    let max_scroll = if constrain_height {
        card_rects
            .iter()
            .map(ClipRect::bottom)
            .max()
            .unwrap_or(0)
            .saturating_sub(grid_rect.bottom())
    } else {
        0
    };

    Ok(PageLayout {
        width: page_width,
        height: page_height,
        header: rect(&tree, header, 0, 0)?,
        search: rect(&tree, search, controls_rect.x, controls_rect.y)?,
        cuisine: rect(&tree, cuisine, controls_rect.x, controls_rect.y)?,
        grid: grid_rect,
        footer: rect(&tree, footer, 0, 0)?,
        columns,
        cards: card_rects,
        max_scroll,
    })
}
