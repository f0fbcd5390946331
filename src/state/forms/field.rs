//! Form field identifiers for the facility form

/// How a field is edited on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Multi-line free text
    Multiline,
    /// Selection from the district reference list
    DistrictSelect,
}

/// The fields of the facility form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityField {
    Name,
    District,
    Address,
    PhoneNumber,
    Latitude,
    Longitude,
}

impl FacilityField {
    /// All fields in display order
    pub const ALL: [FacilityField; 6] = [
        FacilityField::Name,
        FacilityField::District,
        FacilityField::Address,
        FacilityField::PhoneNumber,
        FacilityField::Latitude,
        FacilityField::Longitude,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::District => "district",
            Self::Address => "address",
            Self::PhoneNumber => "phone_number",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Hospital Name*",
            Self::District => "Pick Your District*",
            Self::Address => "Hospital Address*",
            Self::PhoneNumber => "Emergency Contact Number*",
            Self::Latitude => "Latitude*",
            Self::Longitude => "Longitude*",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::District => FieldKind::DistrictSelect,
            Self::Address => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }

    /// Maximum number of characters accepted from the keyboard
    pub fn max_length(&self) -> Option<usize> {
        match self {
            Self::PhoneNumber => Some(13),
            _ => None,
        }
    }

    /// Position of the field in display order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for FacilityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
