/// Static landing page copy, one bundle per language.
///
/// The copy is fixed marketing text, so it lives in consts rather than a
/// translation file; the language switcher just selects a bundle.

use crate::state::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub overview_title: &'static str,
    pub overview_lines: &'static [&'static str],
    pub features_title: &'static str,
    pub features_lines: &'static [&'static str],
    pub contact_cta: &'static str,
    pub contact_button: &'static str,
    /// Short label for the header contact button.
    pub contact_nav: &'static str,
    /// Secondary button beside the brochure request.
    pub learn_more: &'static str,
}

const JA: Content = Content {
    title: "日本の隠れた楽園 — 温泉と自然が融合した至高の邸宅",
    subtitle: "五万坪・天然温泉・プール・テニスコート・サウナ。オーナー直売（仲介不要）",
    overview_title: "物件概要",
    overview_lines: &[
        "敷地面積：約50,000坪（約165,000㎡）",
        "設備：天然温泉、サウナ、屋外プール、テニスコート、ゲストルーム、駐車場多数",
        "用途：別荘／保養所／リゾート開発用地",
    ],
    features_title: "特徴",
    features_lines: &[
        "天然温泉源",
        "山林と河川の景観を一望できる絶景",
        "日本国内登記済・即引渡可能",
        "海外投資家購入可（台湾等）",
    ],
    contact_cta: "詳細資料（日本語／繁體中文／英語）をご希望の方はお問い合わせください。",
    contact_button: "資料を請求する",
    contact_nav: "お問い合わせ",
    learn_more: "詳細を見る",
};

const ZH: Content = Content {
    title: "日本隱世溫泉莊園 — 私人天堂的極致體驗",
    subtitle: "五萬坪・天然溫泉・泳池・網球場・桑拿。屋主直售（無需仲介）",
    overview_title: "物件概要",
    overview_lines: &[
        "面積：約165,000平方公尺（五萬坪）",
        "設施：天然溫泉、桑拿、泳池、網球場、賓客室、多車位停車場",
        "適用用途：私人別墅／企業招待所／度假開發",
    ],
    features_title: "特色",
    features_lines: &[
        "自家天然溫泉泉源（豐富湧出量）",
        "被原始森林與河泊景觀環繞",
        "日本合法登記，即可過戶",
        "開放外國買家（包含台灣、香港、新加坡）",
    ],
    contact_cta: "此不動產由日本屋主直接提供，無須透過仲介公司。",
    contact_button: "索取完整簡介",
    contact_nav: "聯絡我們",
    learn_more: "更多資訊",
};

const EN: Content = Content {
    title: "A Hidden Sanctuary in Japan — The Ultimate Hot Spring Estate",
    subtitle: "50,000 tsubo · natural onsen · pool · tennis court · sauna. Owner direct sale (no agents)",
    overview_title: "Property Overview",
    overview_lines: &[
        "Land Area: Approx. 165,000 m² (50,000 tsubo)",
        "Facilities: Private onsen (hot spring), sauna, pool, tennis court, guest room, parking",
        "Usage: Private villa / Resort / Corporate retreat / Investment",
    ],
    features_title: "Key Features",
    features_lines: &[
        "Private natural hot spring source",
        "Panoramic forest and river views",
        "Fully registered under Japanese property law, ready for transfer",
        "Open to international buyers (Taiwan, Hong Kong, Singapore, etc.)",
    ],
    contact_cta: "This property is offered directly by the owner — no real estate agents involved.",
    contact_button: "Request Full Brochure",
    contact_nav: "Contact",
    learn_more: "Learn More",
};

/// Bundle for the selected language.
pub fn for_language(language: Language) -> &'static Content {
    match language {
        Language::Japanese => &JA,
        Language::TraditionalChinese => &ZH,
        Language::English => &EN,
    }
}

/// Subject line used for every brochure request.
pub const CONTACT_SUBJECT: &str = "Brochure Request - Hot Spring Estate";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_language_has_its_own_bundle() {
        let bundles: Vec<_> = Language::ALL.iter().map(|l| for_language(*l)).collect();
        assert_ne!(bundles[0].title, bundles[1].title);
        assert_ne!(bundles[1].title, bundles[2].title);
    }

    #[test]
    fn test_bundles_are_complete() {
        for language in Language::ALL {
            let content = for_language(language);
            assert!(!content.overview_lines.is_empty());
            assert!(!content.features_lines.is_empty());
            assert!(!content.contact_button.is_empty());
            assert!(!content.learn_more.is_empty());
        }
    }
}
