use std::{path::Path, sync::OnceLock};

use anyhow::Context as _;

use crate::foundation::error::{VetorError, VetorResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Shapes label text with a single font loaded up front.
pub struct LabelTypesetter {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for LabelTypesetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelTypesetter")
            .field("family_name", &self.family_name)
            .finish()
    }
}

impl LabelTypesetter {
    pub fn from_path(path: &Path) -> VetorResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_bytes(bytes)
    }

    /// The regular sans-serif system face, found once per process.
    pub fn from_system() -> VetorResult<Self> {
        static SYSTEM_FACE: OnceLock<Option<(Vec<u8>, u32)>> = OnceLock::new();
        let (bytes, index) = SYSTEM_FACE
            .get_or_init(find_system_face)
            .clone()
            .ok_or_else(|| VetorError::validation("no usable system font found"))?;
        Self::from_face(bytes, index)
    }

    pub fn from_bytes(font_bytes: Vec<u8>) -> VetorResult<Self> {
        Self::from_face(font_bytes, 0)
    }

    /// Face `index` of a font file or collection.
    pub fn from_face(font_bytes: Vec<u8>, index: u32) -> VetorResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .iter()
            .find(|(_, fonts)| fonts.iter().any(|f| f.index() == index))
            .or_else(|| families.first())
            .map(|(id, _)| *id)
            .ok_or_else(|| {
                VetorError::validation("no font families registered from font bytes")
            })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| VetorError::validation("registered font family has no name"))?
            .to_string();

        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), index);

        tracing::debug!(family = %family_name, "loaded label font");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn font(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Single-line layout of `text`.
    pub fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> VetorResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(VetorError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

fn find_system_face() -> Option<(Vec<u8>, u32)> {
    use usvg::fontdb::{Database, Family, Query};

    let mut db = Database::new();
    db.load_system_fonts();
    let preferred = [
        Family::SansSerif,
        Family::Name("DejaVu Sans"),
        Family::Name("Liberation Sans"),
        Family::Name("Noto Sans"),
        Family::Name("Arial"),
    ];
    let id = preferred
        .iter()
        .find_map(|family| {
            db.query(&Query {
                families: std::slice::from_ref(family),
                ..Query::default()
            })
        })
        .or_else(|| db.faces().next().map(|face| face.id))?;
    let face = db.with_face_data(id, |data, index| (data.to_vec(), index));
    tracing::debug!(faces = db.len(), found = face.is_some(), "scanned system fonts");
    face
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
