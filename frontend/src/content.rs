//! Static portfolio and profile content shown on the site.

#[derive(Debug, PartialEq, Eq)]
pub struct PortfolioProject {
    pub id: &'static str,
    pub name: &'static str,
    pub hero: &'static str,
    pub gallery: &'static [&'static str],
}

impl PortfolioProject {
    /// Number of images the viewer cycles through (hero + gallery).
    pub fn image_count(&self) -> usize {
        self.gallery.len() + 1
    }
}

pub const PORTFOLIO_PROJECTS: &[PortfolioProject] = &[
    PortfolioProject {
        id: "sudi",
        name: "SUDI IDENTITY",
        hero: "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509281/13_r4fj91.jpg",
        gallery: &[
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509281/4_voqkkw.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509279/9_nfpwfl.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509277/2_uzwq1u.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509274/8_yszugw.jpg",
        ],
    },
    PortfolioProject {
        id: "durrat",
        name: "DURRAT AL NUZHA",
        hero: "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509584/1_ft58mi.jpg",
        gallery: &[
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509584/8_moznrh.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509583/6_ovqgha.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509585/10_en6ifv.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509600/12_tcmwoc.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509586/11_ahqdpz.jpg",
        ],
    },
    PortfolioProject {
        id: "onmen",
        name: "ONMEN IDENTITY",
        hero: "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509760/1_pzifkr.jpg",
        gallery: &[
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509756/2_auwano.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509756/8_p6kb0d.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509756/11_xcqjol.jpg",
        ],
    },
    PortfolioProject {
        id: "mukhbaza",
        name: "MUKHBAZA ISKANOR",
        hero: "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509915/1_vmmglo.jpg",
        gallery: &[
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509915/3_o7snyq.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509915/9_d1nscx.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509914/7_ctpdux.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509922/11_jhem42.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509920/12_i1urgh.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509917/13_xk2pzy.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767509919/14_m4hqqm.jpg",
        ],
    },
    PortfolioProject {
        id: "bry",
        name: "BRY IDENTITY",
        hero: "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767510161/1_acekn6.jpg",
        gallery: &[
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767510162/5_rhrvep.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767510165/7_vuenrh.jpg",
            "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767510165/9_oq630d.jpg",
        ],
    },
];

#[cfg(test)]
pub fn find_project(id: &str) -> Option<&'static PortfolioProject> {
    PORTFOLIO_PROJECTS.iter().find(|p| p.id == id)
}

pub const EXTRA_GALLERY: &[&str] = &[
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767510971/WhatsApp_Image_2026-01-04_at_10.11.25_AM_ck4mpo.jpg",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767510967/WhatsApp_Image_2026-01-04_at_10.11.03_AM_1_hdqqeq.jpg",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1767510964/WhatsApp_Image_2026-01-04_at_10.11.02_AM_1_oyf82m.jpg",
];

pub const BRAND_IDENTITY_IMAGES: [&str; 8] = [
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386869/1_rja7at.png",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386858/2_kjmj0i.png",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386837/3_zoho3g.png",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386868/4_cgchuq.png",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386848/5_yp0ja4.png",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386850/6_ygmfta.png",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386851/7_lc3eiz.png",
    "https://res.cloudinary.com/dsstn0i8a/image/upload/v1768386847/8_uvqrig.png",
];

pub struct Experience {
    pub year: &'static str,
    pub company: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience { year: "2024", company: "شيشي بي الصينية" },
    Experience { year: "2024", company: "شركة رواشين للتسويق العقاري" },
    Experience { year: "2023-2024", company: "درة النزهة" },
    Experience { year: "2025-2026", company: "مجموعة الحراز" },
    Experience { year: "2025", company: "الباقر للطاقة الشمسية" },
    Experience { year: "2025", company: "Quba Perfumery" },
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Photoshop", level: 90 },
    Skill { name: "Illustrator", level: 95 },
    Skill { name: "InDesign", level: 85 },
    Skill { name: "AI Tools", level: 80 },
    Skill { name: "Analytics", level: 88 },
    Skill { name: "Website Design", level: 85 },
];

pub struct Certification {
    pub title: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { title: "Electrical & Vehicle Inspection Diploma", year: "2021-2023" },
    Certification { title: "Artificial Intelligence & Application Security", year: "2025" },
    Certification { title: "Python (Hands-On)", year: "2025" },
    Certification { title: "Autonomous Vehicles & Robotics", year: "2025" },
    Certification { title: "Digital Marketing", year: "2024" },
    Certification { title: "Advanced Google Courses", year: "2024" },
    Certification { title: "Google Graphic Design", year: "2023" },
    Certification { title: "I Learning Diploma", year: "2022" },
    Certification { title: "German Academy Certificate", year: "2019-2021" },
    Certification { title: "C++ + Office", year: "2019" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_images() -> impl Iterator<Item = &'static str> {
        PORTFOLIO_PROJECTS
            .iter()
            .flat_map(|p| std::iter::once(p.hero).chain(p.gallery.iter().copied()))
            .chain(EXTRA_GALLERY.iter().copied())
            .chain(BRAND_IDENTITY_IMAGES.iter().copied())
    }

    #[test]
    fn every_project_has_a_hero_and_gallery() {
        assert_eq!(PORTFOLIO_PROJECTS.len(), 5);
        for project in PORTFOLIO_PROJECTS {
            assert!(!project.hero.is_empty(), "{}", project.id);
            assert!(!project.gallery.is_empty(), "{}", project.id);
            assert_eq!(project.image_count(), project.gallery.len() + 1);
        }
    }

    #[test]
    fn project_ids_are_unique_and_findable() {
        let ids: HashSet<_> = PORTFOLIO_PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PORTFOLIO_PROJECTS.len());
        assert_eq!(find_project("onmen").map(|p| p.name), Some("ONMEN IDENTITY"));
        assert!(find_project("missing").is_none());
    }

    #[test]
    fn images_are_absolute_cloudinary_urls() {
        for url in all_images() {
            assert!(url.starts_with("https://res.cloudinary.com/"), "{url}");
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }
}
