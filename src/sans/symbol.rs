//! Record-type symbols.

use core::fmt;

use zerocopy::TryFromBytes;

/// The kind of a record, identified by the third byte of its header.
///
/// Codes missing from this enumeration are reserved or retired by the format,
/// and are reported as unrecognised by [`RecordType::lookup`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
pub enum RecordType {
    Header = 0,
    BgnLib = 1,
    LibName = 2,
    Units = 3,
    EndLib = 4,
    BgnStr = 5,
    StrName = 6,
    EndStr = 7,
    Boundary = 8,
    Path = 9,
    SRef = 10,
    ARef = 11,
    Text = 12,
    Layer = 13,
    DataType = 14,
    Width = 15,
    Xy = 16,
    EndEl = 17,
    SName = 18,
    ColRow = 19,
    TextNode = 20,
    Node = 21,
    TextType = 22,
    Presentation = 23,
    String = 25,
    STrans = 26,
    Mag = 27,
    Angle = 28,
    RefLibs = 31,
    Fonts = 32,
    PathType = 33,
    Generations = 34,
    AttrTable = 35,
    ElFlags = 38,
    NodeType = 42,
    PropAttr = 43,
    PropValue = 44,
    Box = 45,
    BoxType = 46,
    Plex = 47,
    BgnExtn = 48,
    EndExtn = 49,
    Ident = 54,
    RealNum = 55,
    ShortNumber = 56,
    Number = 57,
    FlagSym = 58,
    Format = 59,
    Mask = 60,
    EndMasks = 61,
}

impl RecordType {
    /// Find the record type for a header code, if it is recognised.
    pub fn lookup(code: u8) -> Option<Self> {
        zerocopy::try_transmute!(code).ok()
    }

    /// The header code for this record type.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The canonical upper-case name of this record type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "HEADER",
            Self::BgnLib => "BGNLIB",
            Self::LibName => "LIBNAME",
            Self::Units => "UNITS",
            Self::EndLib => "ENDLIB",
            Self::BgnStr => "BGNSTR",
            Self::StrName => "STRNAME",
            Self::EndStr => "ENDSTR",
            Self::Boundary => "BOUNDARY",
            Self::Path => "PATH",
            Self::SRef => "SREF",
            Self::ARef => "AREF",
            Self::Text => "TEXT",
            Self::Layer => "LAYER",
            Self::DataType => "DATATYPE",
            Self::Width => "WIDTH",
            Self::Xy => "XY",
            Self::EndEl => "ENDEL",
            Self::SName => "SNAME",
            Self::ColRow => "COLROW",
            Self::TextNode => "TEXTNODE",
            Self::Node => "NODE",
            Self::TextType => "TEXTTYPE",
            Self::Presentation => "PRESENTATION",
            Self::String => "STRING",
            Self::STrans => "STRANS",
            Self::Mag => "MAG",
            Self::Angle => "ANGLE",
            Self::RefLibs => "REFLIBS",
            Self::Fonts => "FONTS",
            Self::PathType => "PATHTYPE",
            Self::Generations => "GENERATIONS",
            Self::AttrTable => "ATTRTABLE",
            Self::ElFlags => "ELFLAGS",
            Self::NodeType => "NODETYPE",
            Self::PropAttr => "PROPATTR",
            Self::PropValue => "PROPVALUE",
            Self::Box => "BOX",
            Self::BoxType => "BOXTYPE",
            Self::Plex => "PLEX",
            Self::BgnExtn => "BGNEXTN",
            Self::EndExtn => "ENDEXTN",
            Self::Ident => "IDENT",
            Self::RealNum => "REALNUM",
            Self::ShortNumber => "SHORT_NUMBER",
            Self::Number => "NUMBER",
            Self::FlagSym => "FLAGSYM",
            Self::Format => "FORMAT",
            Self::Mask => "MASK",
            Self::EndMasks => "ENDMASKS",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
