use crate::core::Region;

/// What a button does when it fires. `VarianceLabel` is drawn like a button
/// but has no action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    SetPaletteColor,
    VarianceLabel,
    ErasePaletteEntry,
    ToggleGridLines,
    ToggleSymmetry,
    ClearGrid,
    SaveGrid,
    SavePalette,
    LoadGrid,
    LoadPalette,
    FillBackground,
}

pub struct Button {
    pub kind: ButtonKind,
    pub label: String,
    pub region: Region,
}

impl Button {
    pub fn new(kind: ButtonKind, label: &str, region: Region) -> Self {
        Self {
            kind,
            label: label.to_string(),
            region,
        }
    }
}
