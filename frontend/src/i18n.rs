/// Display languages of the site. Arabic is the default locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    /// Label of the toggle button, naming the language you switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Ar => "English",
            Language::En => "العربية",
        }
    }

    /// Compact label used by the navigation bar.
    pub fn short_toggle_label(self) -> &'static str {
        match self {
            Language::Ar => "EN",
            Language::En => "العربية",
        }
    }

    /// Toast shown after switching into `self`.
    pub fn changed_message(self) -> &'static str {
        match self {
            Language::En => "Language changed to English",
            Language::Ar => "تم تغيير اللغة إلى العربية",
        }
    }

    pub fn images_label(self) -> &'static str {
        match self {
            Language::Ar => "صور",
            Language::En => "images",
        }
    }

    pub fn rights_reserved(self) -> &'static str {
        match self {
            Language::Ar => "جميع الحقوق محفوظة",
            Language::En => "All rights reserved.",
        }
    }

    pub fn experience_role(self) -> &'static str {
        match self {
            Language::Ar => "التسويق الرقمي وإدارة المحتوى",
            Language::En => "Digital Marketing & Content Management",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct HomeText {
    pub role: &'static str,
    pub tagline: &'static str,
    pub why_title: &'static str,
    pub why_intro: &'static str,
    pub service1_title: &'static str,
    pub service1_desc: &'static str,
    pub service2_title: &'static str,
    pub service2_desc: &'static str,
    pub service3_title: &'static str,
    pub service3_desc: &'static str,
    pub service4_title: &'static str,
    pub service4_desc: &'static str,
    pub process_title: &'static str,
    pub process_intro: &'static str,
    pub step1_title: &'static str,
    pub step1_desc: &'static str,
    pub step2_title: &'static str,
    pub step2_desc: &'static str,
    pub step3_title: &'static str,
    pub step3_desc: &'static str,
    pub step4_title: &'static str,
    pub step4_desc: &'static str,
    pub portfolio_title: &'static str,
    pub extra_gallery_title: &'static str,
    pub experience_title: &'static str,
    pub experience_subtitle: &'static str,
    pub skills_subtitle: &'static str,
    pub education_title: &'static str,
    pub contact_title: &'static str,
    pub email_label: &'static str,
    pub whatsapp_label: &'static str,
    pub view_gallery: &'static str,
    pub close: &'static str,
    pub years: &'static str,
    pub projects: &'static str,
    pub satisfaction: &'static str,
    pub view_project: &'static str,
    pub nav_home: &'static str,
    pub nav_brand: &'static str,
}

const HOME_AR: HomeText = HomeText {
    role: "مسوق إلكتروني | مصمم جرافيك",
    tagline: "نحوّل الأفكار إلى حضور رقمي مؤثر",
    why_title: "لماذا نحن خيارك الأفضل؟",
    why_intro: "نقدم لك مجموعة متكاملة من الخدمات المبتكرة لتعزيز حضورك الرقمي",
    service1_title: "تصميم جرافيكي مخصص",
    service1_desc: "تصميمات جرافيكية مخصصة تعكس هويتك البصرية وتميزك عن المنافسين.",
    service2_title: "تسويق رقمي احترافي",
    service2_desc: "خبرة في التسويق الرقمي تساعدك على الوصول لجمهورك المستهدف بكفاءة.",
    service3_title: "تطوير مواقع متطورة",
    service3_desc: "تطوير مواقع احترافية باستخدام أحدث التقنيات وأفضل ممارسات البرمجة.",
    service4_title: "دعم فني مستمر",
    service4_desc: "دعم فني وتعديلات مستمرة لما بعد الإطلاق لضمان استمرارية نجاح مشروعك.",
    process_title: "مراحل العمل",
    process_intro: "نتبع منهجية احترافية لضمان تحقيق أفضل النتائج",
    step1_title: "تحليل واحتياجات العميل",
    step1_desc: "لقاء أول لتحديد الأهداف والاحتياجات الخاصة بالمشروع وفهم الجمهور والميزانية.",
    step2_title: "تصميم الواجهات",
    step2_desc: "تصميم باستخدام Figma أو Adobe XD مع نماذج تفاعلية للمراجعة.",
    step3_title: "البرمجة والتطوير",
    step3_desc: "تحويل التصميم إلى كود باستخدام HTML/CSS/JS أو WordPress.",
    step4_title: "إطلاق الموقع",
    step4_desc: "اختبار، تحسين سرعة، تهيئة SEO، نشر، ودعم مستمر.",
    portfolio_title: "أعمالنا المميزة",
    extra_gallery_title: "معرض أعمال إضافية",
    experience_title: "الخبرة والمهارات",
    experience_subtitle: "الخبرة المهنية",
    skills_subtitle: "المهارات",
    education_title: "التعليم والشهادات",
    contact_title: "تواصل معنا",
    email_label: "البريد الإلكتروني",
    whatsapp_label: "واتساب",
    view_gallery: "عرض المعرض",
    close: "إغلاق",
    years: "6+ سنوات الخبرة",
    projects: "50+ مشروع ناجح",
    satisfaction: "98% رضا العملاء",
    view_project: "عرض المشروع",
    nav_home: "الصفحة الرئيسية",
    nav_brand: "الهوية البصرية",
};

const HOME_EN: HomeText = HomeText {
    role: "Digital Marketer | Graphic Designer",
    tagline: "Transforming ideas into impactful digital presence",
    why_title: "Why We're Your Best Choice?",
    why_intro: "We offer you a comprehensive suite of innovative services to enhance your digital presence",
    service1_title: "Custom Graphic Design",
    service1_desc: "Custom graphic designs that reflect your visual identity and distinguish you from competitors.",
    service2_title: "Professional Digital Marketing",
    service2_desc: "Digital marketing expertise to help you reach your target audience efficiently.",
    service3_title: "Advanced Website Development",
    service3_desc: "Professional website development using the latest technologies and best coding practices.",
    service4_title: "Continuous Technical Support",
    service4_desc: "Technical support and ongoing adjustments after launch to ensure project success continuity.",
    process_title: "Work Process",
    process_intro: "We follow a professional methodology to ensure achieving the best results",
    step1_title: "Analysis and Client Needs",
    step1_desc: "Initial meeting to determine project goals, requirements, understand audience, and budget.",
    step2_title: "Interface Design",
    step2_desc: "Design using Figma or Adobe XD with interactive models for review.",
    step3_title: "Programming and Development",
    step3_desc: "Converting design to code using HTML/CSS/JS or WordPress.",
    step4_title: "Website Launch",
    step4_desc: "Testing, speed optimization, SEO setup, publishing, and ongoing support.",
    portfolio_title: "Our Featured Work",
    extra_gallery_title: "Extra Work Gallery",
    experience_title: "Experience & Skills",
    experience_subtitle: "Professional Experience",
    skills_subtitle: "Skills",
    education_title: "Education & Certifications",
    contact_title: "Contact Us",
    email_label: "Email",
    whatsapp_label: "WhatsApp",
    view_gallery: "View Gallery",
    close: "Close",
    years: "6+ Years Experience",
    projects: "50+ Successful Projects",
    satisfaction: "98% Client Satisfaction",
    view_project: "View Project",
    nav_home: "Home",
    nav_brand: "Brand Identity",
};

impl HomeText {
    pub fn for_language(lang: Language) -> &'static HomeText {
        match lang {
            Language::Ar => &HOME_AR,
            Language::En => &HOME_EN,
        }
    }

    /// (title, description) pairs of the four service cards.
    pub fn services(&self) -> [(&'static str, &'static str); 4] {
        [
            (self.service1_title, self.service1_desc),
            (self.service2_title, self.service2_desc),
            (self.service3_title, self.service3_desc),
            (self.service4_title, self.service4_desc),
        ]
    }

    /// (title, description) pairs of the work process, in order.
    pub fn steps(&self) -> [(&'static str, &'static str); 4] {
        [
            (self.step1_title, self.step1_desc),
            (self.step2_title, self.step2_desc),
            (self.step3_title, self.step3_desc),
            (self.step4_title, self.step4_desc),
        ]
    }

    pub fn stats(&self) -> [&'static str; 3] {
        [self.years, self.projects, self.satisfaction]
    }
}

#[derive(Debug, PartialEq)]
pub struct BrandText {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub presence_title: &'static str,
    pub presence_desc: &'static str,
    pub color_title: &'static str,
    pub color_desc: &'static str,
    pub geometry_title: &'static str,
    pub geometry_desc: &'static str,
    pub personality_title: &'static str,
    pub personality_desc: &'static str,
    pub closing_title: &'static str,
    pub closing_desc: &'static str,
    pub brand_nav: &'static str,
}

const BRAND_AR: BrandText = BrandText {
    hero_title: "الهوية البصرية",
    hero_subtitle: "حضور رقمي ينبض بالتميز والاحترافية",
    presence_title: "الحضور الرقمي المؤثر",
    presence_desc: "نحن نؤمن أن الهوية البصرية ليست مجرد شعار، بل هي قصة تُروى، تجربة تُعاش، وانطباع يدوم. نحول رؤيتك إلى علامة تجارية لا تُنسى.",
    color_title: "فلسفة الألوان",
    color_desc: "اخترنا الألوان بعناية لتعكس الفخامة والثقة والاحترافية. الأسود العميق يمنح القوة، والذهبي يضيف لمسة من الأصالة والتميز، مع الحفاظ على التوازن المثالي.",
    geometry_title: "الهندسة والتجريد",
    geometry_desc: "استوحينا عناصر التصميم من شعارنا: جناح الخفاش يمثل القوة والفرادة، رأس القلم يرمز للدقة والحرفية، والحافة المستديرة تعكس الاحترافية المتناهية.",
    personality_title: "شخصية العلامة",
    personality_desc: "استراتيجية، هادئة، فاخرة، ومؤثرة. نحن نبني علامات تجارية لا تلفت الأنظار فحسب، بل تكسب الثقة وتخلق علاقات طويلة الأمد مع الجمهور.",
    closing_title: "تميز يُلاحظ من اللحظة الأولى",
    closing_desc: "كل تصميم نقوم به، هو انعكاس لهوية علامتك التجارية. نلتزم بالجودة، الإبداع، والتميز في كل تفصيل صغير.",
    brand_nav: "الرئيسية",
};

const BRAND_EN: BrandText = BrandText {
    hero_title: "Brand Identity",
    hero_subtitle: "A Digital Presence Pulsating with Excellence",
    presence_title: "Impactful Digital Presence",
    presence_desc: "We believe visual identity is not just a logo, it's a story told, an experience lived, and an impression that lasts. We transform your vision into an unforgettable brand.",
    color_title: "Color Philosophy",
    color_desc: "We carefully selected colors to reflect luxury, trust, and professionalism. Deep black conveys strength, while gold adds authenticity and distinction, maintaining perfect balance.",
    geometry_title: "Geometry & Abstraction",
    geometry_desc: "We derived design elements from our logo: the bat wing representing strength and uniqueness, the pen nib symbolizing precision and craftsmanship, and rounded edges reflecting utmost professionalism.",
    personality_title: "Brand Personality",
    personality_desc: "Strategic, calm, premium, and impactful. We build brands that not only capture attention but earn trust and create lasting relationships with audiences.",
    closing_title: "Distinction Noticed From First Glance",
    closing_desc: "Every design we create reflects your brand's identity. We commit to quality, creativity, and excellence in every small detail.",
    brand_nav: "Home",
};

impl BrandText {
    pub fn for_language(lang: Language) -> &'static BrandText {
        match lang {
            Language::Ar => &BRAND_AR,
            Language::En => &BRAND_EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_fields(t: &HomeText) -> Vec<&'static str> {
        let mut fields = vec![
            t.role,
            t.tagline,
            t.why_title,
            t.why_intro,
            t.process_title,
            t.process_intro,
            t.portfolio_title,
            t.extra_gallery_title,
            t.experience_title,
            t.experience_subtitle,
            t.skills_subtitle,
            t.education_title,
            t.contact_title,
            t.email_label,
            t.whatsapp_label,
            t.view_gallery,
            t.close,
            t.view_project,
            t.nav_home,
            t.nav_brand,
        ];
        for (title, desc) in t.services().into_iter().chain(t.steps()) {
            fields.push(title);
            fields.push(desc);
        }
        fields.extend(t.stats());
        fields
    }

    fn brand_fields(t: &BrandText) -> Vec<&'static str> {
        vec![
            t.hero_title,
            t.hero_subtitle,
            t.presence_title,
            t.presence_desc,
            t.color_title,
            t.color_desc,
            t.geometry_title,
            t.geometry_desc,
            t.personality_title,
            t.personality_desc,
            t.closing_title,
            t.closing_desc,
            t.brand_nav,
        ]
    }

    #[test]
    fn toggle_flips_and_round_trips() {
        assert_eq!(Language::default(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled().toggled(), Language::Ar);
    }

    #[test]
    fn direction_follows_locale() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
    }

    #[test]
    fn toggling_swaps_every_home_string() {
        let ar = home_fields(HomeText::for_language(Language::Ar));
        let en = home_fields(HomeText::for_language(Language::Ar.toggled()));
        assert_eq!(ar.len(), en.len());
        for (a, e) in ar.iter().zip(en.iter()) {
            assert!(!a.is_empty() && !e.is_empty());
            assert_ne!(a, e, "string not translated: {e}");
        }
    }

    #[test]
    fn toggling_swaps_every_brand_string() {
        let ar = brand_fields(BrandText::for_language(Language::Ar));
        let en = brand_fields(BrandText::for_language(Language::En));
        for (a, e) in ar.iter().zip(en.iter()) {
            assert_ne!(a, e, "string not translated: {e}");
        }
    }

    #[test]
    fn helper_labels_differ_per_locale() {
        assert_eq!(Language::Ar.toggle_label(), "English");
        assert_eq!(Language::En.toggle_label(), "العربية");
        assert_eq!(Language::En.changed_message(), "Language changed to English");
        assert_ne!(Language::Ar.rights_reserved(), Language::En.rights_reserved());
        assert_ne!(Language::Ar.images_label(), Language::En.images_label());
    }
}
