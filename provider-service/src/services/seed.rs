use crate::models::Provider;

/// Fixed development dataset behind `POST /seed`.
///
/// Every price is distinct so that price-sorted listings over the seeded
/// collection are deterministic.
const SAMPLE_PROVIDERS: &[(&str, &str, f64, &str)] = &[
    ("iso_001", "ISO Insurance", 450.0, "https://www.isoa.org"),
    ("sg_002", "Student Guard", 600.0, "https://www.studentguard.com"),
    (
        "icp_003",
        "International Care Plus",
        550.0,
        "https://www.intlcareplus.com",
    ),
    (
        "chs_004",
        "Campus Health Shield",
        480.0,
        "https://www.campushealth.com",
    ),
    (
        "gsi_005",
        "Global Student Insurance",
        520.0,
        "https://www.globalstudent.com",
    ),
    (
        "acn_006",
        "Academic Care Network",
        395.0,
        "https://www.academiccare.com",
    ),
    (
        "eyt_007",
        "Student Secure",
        105.0,
        "http://www.internationalstudentinsurance.com",
    ),
    (
        "fdu_008",
        "Student Journey Lite",
        150.0,
        "https://www.imglobal.com/travel-medical-insurance/student-journey-lite",
    ),
    (
        "uhi_007",
        "Universal Health Insurance",
        475.0,
        "https://www.universalhealth.com",
    ),
    (
        "psi_008",
        "Premier Student Insurance",
        425.0,
        "https://www.premierstudent.com",
    ),
    (
        "gci_009",
        "Global Care International",
        565.0,
        "https://www.globalcare.com",
    ),
    (
        "asi_010",
        "American Student Insurance",
        510.0,
        "https://www.americanstudent.com",
    ),
    (
        "shp_011",
        "Scholar Health Plan",
        340.0,
        "https://www.scholarhealthplan.com",
    ),
    (
        "nsc_012",
        "National Student Care",
        465.0,
        "https://www.nationalstudentcare.com",
    ),
    (
        "ehs_013",
        "Everest Health for Students",
        610.0,
        "https://www.everesthealth.com",
    ),
    (
        "csp_014",
        "CampusCare Plus",
        430.0,
        "https://www.campuscareplus.com",
    ),
    (
        "ssb_015",
        "Study Safe Basic",
        185.0,
        "https://www.studysafe.com/basic",
    ),
    (
        "ssp_016",
        "Study Safe Premium",
        540.0,
        "https://www.studysafe.com/premium",
    ),
    (
        "mhi_017",
        "Meridian Health International",
        585.0,
        "https://www.meridianhealth.com",
    ),
    (
        "bsc_018",
        "Bridgeway Student Cover",
        275.0,
        "https://www.bridgewaycover.com",
    ),
    (
        "aps_019",
        "Atlas Protect Student",
        320.0,
        "https://www.atlasprotect.com",
    ),
    (
        "hsg_020",
        "Horizon Student Group",
        495.0,
        "https://www.horizonstudent.com",
    ),
    (
        "pcc_021",
        "Pacific Campus Care",
        415.0,
        "https://www.pacificcampuscare.com",
    ),
    (
        "lsh_022",
        "Liberty Scholar Health",
        535.0,
        "https://www.libertyscholar.com",
    ),
    (
        "trv_023",
        "TravelWell Student",
        230.0,
        "https://www.travelwellstudent.com",
    ),
    (
        "ecs_024",
        "EduCare Select",
        460.0,
        "https://www.educareselect.com",
    ),
    (
        "fsp_025",
        "First Student Protect",
        380.0,
        "https://www.firststudentprotect.com",
    ),
    (
        "gwi_026",
        "Gateway International",
        625.0,
        "https://www.gatewayintl.com",
    ),
    (
        "umb_027",
        "Umbrella Student Health",
        505.0,
        "https://www.umbrellastudent.com",
    ),
    (
        "cvp_028",
        "CampusVital Plus",
        355.0,
        "https://www.campusvital.com",
    ),
    (
        "wsa_029",
        "WorldStudent Assist",
        575.0,
        "https://www.worldstudentassist.com",
    ),
];

pub fn sample_providers() -> Vec<Provider> {
    SAMPLE_PROVIDERS
        .iter()
        .map(|&(provider_id, name, price, website_link)| {
            Provider::new(
                provider_id.to_string(),
                name.to_string(),
                price,
                website_link.to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_dataset_has_31_providers() {
        assert_eq!(sample_providers().len(), 31);
    }

    #[test]
    fn sample_provider_ids_are_unique() {
        let mut ids: Vec<&str> = SAMPLE_PROVIDERS.iter().map(|p| p.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SAMPLE_PROVIDERS.len());
    }

    #[test]
    fn sample_prices_are_distinct_and_non_negative() {
        let mut prices: Vec<u64> = SAMPLE_PROVIDERS
            .iter()
            .map(|p| {
                assert!(p.2 >= 0.0);
                (p.2 * 100.0) as u64
            })
            .collect();
        prices.sort_unstable();
        prices.dedup();
        assert_eq!(prices.len(), SAMPLE_PROVIDERS.len());
    }
}
