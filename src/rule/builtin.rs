//! 内置厂商规则（16个Shopify产品选项应用）
//! 权重反映特征的唯一性：内联JS对象名与CDN脚本最高，通用CSS类名最低

use super::model::{RuleLibrary, VendorRule};

/// 构建内置规则库，顺序即检测与并列排序顺序
pub fn builtin_rules() -> RuleLibrary {
    let vendors = vec![
        VendorRule::new("Zepto Product Personalizer")
            .contains("pplr_custom_cart_track", 30)
            .contains("zepto-personalizer-container", 25)
            .contains("shopify://apps/zepto-product-personalizer", 30)
            .contains("_zepto_design_id", 15),
        VendorRule::new("Bold Product Options")
            .class("bold_options", 15)
            .class("bold_option_set", 15)
            .class("bold_option", 15)
            .class("bold_option_title", 15)
            .class("bold_option_value", 15)
            .element_attr("script", "src", r"boldapps\.net", 30)
            .any_contains(&["BoldOptions", "window.Bold"], 25),
        VendorRule::new("Kickflip")
            .regex(r#"class="[^"]*mczr[^"]*""#, 15)
            .regex(r#"id="[^"]*mczr[^"]*""#, 15)
            .regex(r"data-mczr=", 15)
            .regex(r"#mczr-modal", 15)
            .regex(r"mczrAddToCart", 15)
            .element_attr("iframe", "src", r"gokickflip\.com", 40),
        VendorRule::new("Customily")
            .contains("window.engraver", 35)
            .contains("engraver.init", 30)
            .contains("customily.com", 25)
            .contains("preview-canvas", 10),
        VendorRule::new("Shoppad Infinite Options")
            .contains("Shoppad.apps.infiniteoptions", 40)
            .contains("infiniteoptions-container", 30)
            .contains("infinite_options", 20)
            .contains("window.Shoppad", 10),
        VendorRule::new("Hulk Product Options")
            .contains("HulkProductOptions", 35)
            .contains("hulk-product-options", 30)
            .contains("hulkapps.com", 25)
            .contains("hulk_po", 10),
        VendorRule::new("Tepo Product Options")
            .contains("tepo-options", 30)
            .contains("TepoOptions", 30)
            .contains("class=\"tepo-", 25)
            .contains("window.tepo", 15),
        VendorRule::new("APO (Advanced Product Options)")
            .contains("mwProductOptionsObjects", 40)
            .contains("mw-product-options", 30)
            .contains("mageworx", 20)
            .contains("_mw_option_relation", 10),
        VendorRule::new("Teeinblue")
            .contains("Teeinblue", 30)
            .contains("teeinblue-form", 30)
            .contains("teeinblue.com", 25)
            .contains("window.TIB", 15),
        VendorRule::new("Zakeke")
            .contains("zakekeDesigner", 35)
            .contains("zakeke-container", 30)
            .contains("zakeke.com", 25)
            .contains("zakeke-button", 10),
        VendorRule::new("SC Product Options")
            .contains("SCProductOptions", 35)
            .contains("sc-product-options", 30)
            .contains("data-sc-option", 20)
            .contains("shopcircle", 15),
        VendorRule::new("LPO (Live Product Options)")
            .contains("liveProductOptions", 35)
            .contains("lpo-options", 30)
            .contains("cloudlift", 25)
            .contains("window.LPO", 10),
        VendorRule::new("Avis Product Options")
            .contains("AvisOptions", 35)
            .contains("avis-options", 30)
            .contains("avisplus-product-options", 25)
            .contains("data-avis-option", 10),
        VendorRule::new("Globo Product Options")
            .contains("GloboProductOptions", 35)
            .contains("globo-options", 30)
            .contains("globo.io", 25)
            .contains("globosoftware", 15),
        VendorRule::new("Easily Product Options")
            .contains("EasilyOptions", 35)
            .contains("easily-options", 30)
            .contains("data-easily", 20)
            .contains("easily_product_options", 15),
        VendorRule::new("Shopaw Product Options")
            .contains("ShopawOptions", 35)
            .contains("shopaw-options", 30)
            .contains("shopaw-product-builder", 25)
            .contains("data-shopaw", 10),
    ];

    RuleLibrary { vendors }
}
