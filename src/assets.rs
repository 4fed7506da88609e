// SPDX-License-Identifier: MPL-2.0
//! Bundled asset lookup.
//!
//! Fonts and the demo image are embedded at compile time and fetched by
//! symbolic name at startup. A name that fails to resolve, or an image that
//! fails to decode, is a fatal launch error; nothing is loaded lazily after
//! that point.

use std::borrow::Cow;

use iced::widget::image::Handle;
use rust_embed::RustEmbed;

use crate::error::Error;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

/// Serif face used by the title text role.
pub const FONT_TITLE: &str = "fonts/DejaVuSerif.ttf";
/// Sans face used by the subtitle text role.
pub const FONT_SUBTITLE: &str = "fonts/DejaVuSans.ttf";
/// Mono face used by the caption text role.
pub const FONT_CAPTION: &str = "fonts/DejaVuSansMono.ttf";
/// The demo emblem image shown by the card and list screens.
pub const IMAGE_EMBLEM: &str = "images/emblem.png";

const FONT_NAMES: [&str; 3] = [FONT_TITLE, FONT_SUBTITLE, FONT_CAPTION];

/// Assets resolved and validated at startup.
#[derive(Debug, Clone)]
pub struct Assets {
    /// Raw font bytes, in registration order.
    pub fonts: Vec<Cow<'static, [u8]>>,
    /// Decoded-once handle for the emblem image.
    pub emblem: Handle,
}

/// Resolves every bundled asset, failing on the first missing or
/// undecodable one.
pub fn load() -> Result<Assets, Error> {
    let mut fonts = Vec::with_capacity(FONT_NAMES.len());
    for name in FONT_NAMES {
        fonts.push(font_bytes(name)?);
    }

    Ok(Assets {
        fonts,
        emblem: emblem_handle()?,
    })
}

fn font_bytes(name: &str) -> Result<Cow<'static, [u8]>, Error> {
    Asset::get(name)
        .map(|file| file.data)
        .ok_or_else(|| Error::Asset(format!("missing bundled font: {name}")))
}

fn emblem_handle() -> Result<Handle, Error> {
    let file = Asset::get(IMAGE_EMBLEM)
        .ok_or_else(|| Error::Asset(format!("missing bundled image: {IMAGE_EMBLEM}")))?;
    let bytes = file.data.into_owned();

    // Decode up front so a corrupt bundle aborts launch instead of showing
    // an empty image widget.
    image_rs::load_from_memory(&bytes)
        .map_err(|err| Error::Asset(format!("undecodable bundled image {IMAGE_EMBLEM}: {err}")))?;

    Ok(Handle::from_bytes(bytes))
}
