//! Lucid dreaming techniques offered in the settings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A technique for becoming aware inside a dream.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LucidDreamingTechnique {
    #[default]
    Reality,
    Mild,
    Wild,
    Wbtb,
    Astral,
}

impl LucidDreamingTechnique {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Reality => "Gerçeklik Kontrolü",
            Self::Mild => "MILD Tekniği",
            Self::Wild => "WILD Tekniği",
            Self::Wbtb => "WBTB Tekniği",
            Self::Astral => "Astral Seyahat",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Reality => {
                "Gün içinde düzenli olarak gerçeklik kontrolü yaparak rüyada olup olmadığınızı test etmenizi sağlar."
            }
            Self::Mild => {
                "Uyumadan önce bilinçli rüya görme niyetinizi güçlendiren ve hatırlamanızı sağlayan teknik."
            }
            Self::Wild => {
                "Uyanıklıktan doğrudan rüya durumuna geçmenizi sağlayan ileri seviye bir teknik."
            }
            Self::Wbtb => {
                "Uyku sırasında kalkıp kısa bir süre uyanık kaldıktan sonra tekrar uyuyarak bilinç farkındalığını artıran teknik."
            }
            Self::Astral => {
                "Bilinçli rüya ve astral seyahat arasında bağlantı kuran meditasyon ve konsantrasyon teknikleri."
            }
        }
    }

    /// Four practical tips for the technique.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Self::Reality => &[
                "Ellerinize bakın ve parmaklarınızı sayın - rüyada genellikle farklı görünürler",
                "Saate bakın, gözlerinizi kapatın ve tekrar bakın - rüyada zaman farklı akar",
                "Burnunuzu kapatıp nefes almayı deneyin - rüyada nefes alabilirsiniz",
                "Bir yazıya bakın, başka yöne bakın ve tekrar okuyun - rüyada yazılar değişir",
            ],
            Self::Mild => &[
                "Uyumadan önce 'Rüyamda bilinçli olacağım' diye tekrarlayın",
                "Önceki rüyalarınızı hatırlayıp, onları bilinçli olarak tekrar yaşamayı hayal edin",
                "Bilinçli rüya göreceğinize dair güçlü bir niyet oluşturun",
                "Son düşünceniz rüyanızda bilinçli olmak olsun",
            ],
            Self::Wild => &[
                "Vücudunuz uyurken zihninizi uyanık tutmaya odaklanın",
                "Hipnagojik görüntülere dikkat edin ve onları bilinçli olarak yönlendirin",
                "Vücudunuzun uyuşmasını hissettiğinizde paniğe kapılmayın",
                "Kendinizi rüya sahnesine geçiş yaparken hayal edin",
            ],
            Self::Wbtb => &[
                "5-6 saat uyuduktan sonra 20-30 dakika uyanık kalın",
                "Uyanık kaldığınız sürede bilinçli rüya hakkında okuyun",
                "Tekrar uyumadan önce bilinçli rüya göreceğinize dair niyet oluşturun",
                "REM uykusuna girerken zihninizin uyanık kalmasına odaklanın",
            ],
            Self::Astral => &[
                "Uyumadan önce derin meditasyon yapın",
                "Vücudunuzun dışına çıktığınızı ve yüzdüğünüzü hayal edin",
                "Titreşim hissini fark edin ve korkuya kapılmayın",
                "İp merdiven veya spiral yol gibi çıkış sembollerini hayal edin",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_technique_has_four_tips() {
        for technique in LucidDreamingTechnique::iter() {
            assert_eq!(technique.tips().len(), 4, "{technique}");
            assert!(!technique.description().is_empty());
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            "WBTB".parse::<LucidDreamingTechnique>().unwrap(),
            LucidDreamingTechnique::Wbtb
        );
        assert_eq!(LucidDreamingTechnique::Mild.to_string(), "mild");
        assert_eq!(LucidDreamingTechnique::Astral.display_name(), "Astral Seyahat");
    }
}
