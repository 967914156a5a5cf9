use std::fmt;

/// Input fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
    DateRevision,
}

impl FormField {
    pub const COUNT: usize = 6;

    pub const ALL: [FormField; Self::COUNT] = [
        FormField::Id,
        FormField::Name,
        FormField::Description,
        FormField::Logo,
        FormField::DateRelease,
        FormField::DateRevision,
    ];

    /// Fields that stay editable when an existing product is edited.
    pub const EDITABLE: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::Logo,
        FormField::DateRelease,
        FormField::DateRevision,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire/form key of the field.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Name => "name",
            FormField::Description => "description",
            FormField::Logo => "logo",
            FormField::DateRelease => "date_release",
            FormField::DateRevision => "date_revision",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
