//! Scanner site fingerprints.
//!
//! Where the subject identifier lives depends on the acquisition site. A
//! site is recognised by the exact values of four DICOM fields; the table
//! is evaluated in order and the first complete match decides how the
//! subject is extracted. Records from unknown sites fall back to the raw
//! `PatientID`.

use bids_model::{MetadataRecord, fields};

/// Exact-match values identifying one scanner installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteFingerprint {
    pub station_name: &'static str,
    pub institution_name: &'static str,
    pub manufacturer: &'static str,
    pub model_name: &'static str,
}

impl SiteFingerprint {
    /// All four fields must be present and equal (case-sensitive).
    pub fn matches(&self, record: &MetadataRecord) -> bool {
        [
            (fields::STATION_NAME, self.station_name),
            (fields::INSTITUTION_NAME, self.institution_name),
            (fields::MANUFACTURER, self.manufacturer),
            (fields::MANUFACTURER_MODEL_NAME, self.model_name),
        ]
        .iter()
        .all(|(field, expected)| record.text(field).as_deref() == Some(*expected))
    }
}

/// How the subject identifier is derived for a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectSource {
    /// `PatientName`, unchanged.
    PatientName,
    /// First `_`-separated segment of `PatientID`.
    PatientIdPrefix,
    /// `PatientID`, unchanged.
    PatientId,
}

impl SubjectSource {
    pub fn extract(self, record: &MetadataRecord) -> Option<String> {
        match self {
            Self::PatientName => record.text(fields::PATIENT_NAME).map(String::from),
            Self::PatientIdPrefix => record
                .text(fields::PATIENT_ID)
                .and_then(|id| id.split('_').next().map(str::to_string)),
            Self::PatientId => record.text(fields::PATIENT_ID).map(String::from),
        }
    }
}

/// A known scanner site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub name: &'static str,
    pub fingerprint: SiteFingerprint,
    pub subject: SubjectSource,
}

/// Known sites, in evaluation order. New sites go at the end.
pub const KNOWN_SITES: &[Site] = &[
    Site {
        name: "philips-3t-magdeburg",
        fingerprint: SiteFingerprint {
            station_name: "3T-PHILIPSMR",
            institution_name: "Leibniz Institut Magdeburg",
            manufacturer: "Philips Medical Systems",
            model_name: "Achieva dStream",
        },
        subject: SubjectSource::PatientName,
    },
    Site {
        name: "siemens-prisma-neurologie",
        fingerprint: SiteFingerprint {
            station_name: "AWP66017",
            institution_name: "Neurologie",
            manufacturer: "SIEMENS",
            model_name: "Prisma",
        },
        subject: SubjectSource::PatientIdPrefix,
    },
    Site {
        name: "siemens-7t-lin",
        fingerprint: SiteFingerprint {
            station_name: "PCR7T1-15",
            institution_name: "LIN",
            manufacturer: "SIEMENS",
            model_name: "Investigational_Device_7T",
        },
        subject: SubjectSource::PatientIdPrefix,
    },
];

/// Subject extraction for records that match no known site.
pub const FALLBACK_SUBJECT: SubjectSource = SubjectSource::PatientId;

/// Returns the first known site whose fingerprint matches the record.
pub fn match_site(record: &MetadataRecord) -> Option<&'static Site> {
    KNOWN_SITES
        .iter()
        .find(|site| site.fingerprint.matches(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prisma() -> MetadataRecord {
        MetadataRecord::new()
            .with(fields::STATION_NAME, "AWP66017")
            .with(fields::INSTITUTION_NAME, "Neurologie")
            .with(fields::MANUFACTURER, "SIEMENS")
            .with(fields::MANUFACTURER_MODEL_NAME, "Prisma")
    }

    #[test]
    fn matches_complete_fingerprint() {
        let site = match_site(&prisma()).expect("prisma site");
        assert_eq!(site.name, "siemens-prisma-neurologie");
    }

    #[test]
    fn partial_fingerprint_does_not_match() {
        let record = prisma().with(fields::MANUFACTURER_MODEL_NAME, "Skyra");
        assert!(match_site(&record).is_none());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let record = prisma().with(fields::MANUFACTURER, "Siemens");
        assert!(match_site(&record).is_none());
    }

    #[test]
    fn prefix_without_separator_keeps_whole_id() {
        let record = MetadataRecord::new().with(fields::PATIENT_ID, "sub07");
        assert_eq!(
            SubjectSource::PatientIdPrefix.extract(&record),
            Some("sub07".to_string())
        );
        assert_eq!(SubjectSource::PatientIdPrefix.extract(&MetadataRecord::new()), None);
    }
}
