// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the gallery.

## Organization

- **Palette**: Base colors
- **Opacity**: Overlay and surface transparency
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Thumbnail, search box and spinner sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let gutter = spacing::XS; // 8px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const NOTICE: f32 = 0.15;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Viewer backdrop; the gallery stays faintly visible underneath.
    pub const BACKDROP: f32 = 0.85;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Loading spinner diameter.
    pub const ICON_XL: f32 = 48.0;

    /// Edge of a square gallery thumbnail.
    pub const THUMBNAIL: f32 = 220.0;

    /// Width of the search box.
    pub const SEARCH_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: page heading and overlay controls
    //! - Body: search box and notices
    //! - Caption: spinner label

    /// Large title - Gallery heading
    pub const TITLE_LG: f32 = 30.0;

    /// Small title - Viewer close button
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Search input, no-results notice
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Error notices
    pub const BODY: f32 = 14.0;

    /// Caption - Loading label
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_MEDIUM && opacity::BACKDROP < 1.0);

    // A thumbnail must fit beside the page padding on the narrowest window.
    assert!(sizing::THUMBNAIL + 2.0 * spacing::LG < 650.0);
    assert!(sizing::SEARCH_WIDTH > sizing::THUMBNAIL);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};
