use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::{MarkerIcon, MARKER_ICON_SIZE_PX};

/// Marker color derived from the happy hour status at creation time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MarkerColor {
    HappyHour,
    AfterHours,
}

impl MarkerColor {
    pub const fn hex(self) -> &'static str {
        match self {
            Self::HappyHour => "#FFD700",
            Self::AfterHours => "#0B3D91",
        }
    }
}

/// Renders the beer glass marker icon as an inline SVG data URL.
///
/// Only the badge color varies; everything else about the icon is fixed.
pub fn marker_icon(color: MarkerColor) -> MarkerIcon {
    let svg = beer_svg(color.hex());
    let url = format!(
        "data:image/svg+xml;charset=UTF-8,{}",
        utf8_percent_encode(&svg, NON_ALPHANUMERIC)
    );
    MarkerIcon {
        url,
        size_px: MARKER_ICON_SIZE_PX,
    }
}

fn beer_svg(color: &str) -> String {
    let size = MARKER_ICON_SIZE_PX;
    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 36 36" fill="none" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <filter id="shadow" x="-50%" y="-50%" width="200%" height="200%">
      <feDropShadow dx="0" dy="2" stdDeviation="2" flood-color="rgba(0,0,0,0.3)"/>
    </filter>
  </defs>
  <g filter="url(#shadow)">
    <circle cx="18" cy="18" r="16" fill="{color}"/>
  </g>
  <g transform="translate(10,9)">
    <rect x="3" y="6" width="9" height="9" rx="2" fill="#fff" stroke="#fff" stroke-width="1.5"/>
    <rect x="0.5" y="5" width="11" height="8" rx="2" fill="#fff" stroke="#fff" stroke-width="1.5"/>
    <rect x="2" y="7" width="7" height="6" rx="1" fill="#ffcc00"/>
    <rect x="11.5" y="6.5" width="3.5" height="5" rx="1.75" fill="#fff" stroke="#fff"/>
  </g>
</svg>"##
    )
}
