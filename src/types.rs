use serde::{Deserialize, Serialize};
use std::fmt;

/// Consumer genotyping provider that produced a raw data export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "23andMe")]
    TwentyThreeAndMe,
    #[serde(rename = "AncestryDNA")]
    AncestryDna,
    #[serde(rename = "FamilyTreeDNA")]
    FamilyTreeDna,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Source {
    pub const ACCEPTED: &'static str = "23andMe, AncestryDNA or FamilyTreeDNA";

    /// Looks for the provider banner vendors put in their comment header.
    pub fn from_header(header_text: &str) -> Option<Self> {
        let lower = header_text.to_ascii_lowercase();
        if lower.contains("23andme") {
            Some(Source::TwentyThreeAndMe)
        } else if lower.contains("ancestrydna") || lower.contains("ancestry.com") {
            Some(Source::AncestryDna)
        } else if lower.contains("familytreedna") || lower.contains("ftdna") {
            Some(Source::FamilyTreeDna)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::TwentyThreeAndMe => "23andMe",
            Source::AncestryDna => "AncestryDNA",
            Source::FamilyTreeDna => "FamilyTreeDNA",
            Source::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenomeBuild {
    GRCh36,
    GRCh37,
    GRCh38,
}

impl Default for GenomeBuild {
    fn default() -> Self {
        GenomeBuild::GRCh37
    }
}

impl GenomeBuild {
    pub fn from_header(header_text: &str) -> Option<Self> {
        let lower = header_text.to_ascii_lowercase();
        if lower.contains("grch38") || lower.contains("build 38") || lower.contains("hg38") {
            Some(GenomeBuild::GRCh38)
        } else if lower.contains("grch37") || lower.contains("build 37") || lower.contains("hg19") {
            Some(GenomeBuild::GRCh37)
        } else if lower.contains("build 36") || lower.contains("ncbi36") || lower.contains("hg18") {
            Some(GenomeBuild::GRCh36)
        } else {
            None
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            GenomeBuild::GRCh36 => 36,
            GenomeBuild::GRCh37 => 37,
            GenomeBuild::GRCh38 => 38,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GenomeBuild::GRCh36 => "NCBI36",
            GenomeBuild::GRCh37 => "GRCh37",
            GenomeBuild::GRCh38 => "GRCh38",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_provider_and_build() {
        let header = "# This data file generated by 23andMe at: Mon Jan 01 2024\n\
                      # ... reference human assembly build 37 (also known as Annotation Release 104)";
        assert_eq!(Source::from_header(header), Some(Source::TwentyThreeAndMe));
        assert_eq!(GenomeBuild::from_header(header), Some(GenomeBuild::GRCh37));

        let ancestry = "#AncestryDNA raw data download\n#using reference build 38";
        assert_eq!(Source::from_header(ancestry), Some(Source::AncestryDna));
        assert_eq!(GenomeBuild::from_header(ancestry), Some(GenomeBuild::GRCh38));

        assert_eq!(Source::from_header("# some lab"), None);
        assert_eq!(GenomeBuild::from_header("# some lab"), None);
    }
}
