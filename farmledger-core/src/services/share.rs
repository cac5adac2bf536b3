// File: farmledger-core/src/services/share.rs
//
// Share-target URL builders. Pure string construction; opening the link is
// the caller's (browser's) side effect, and no ledger state changes here.

use urlencoding::encode;

pub const STOREFRONT_URL: &str = "https://aadhyafarms.com";

/// The canned invitation carrying a referral code.
pub fn referral_message(code: &str) -> String {
    format!(
        "Join me on Aadhya Farms for farm-fresh organics delivered home! \
         Use my referral code {code} to earn {credits} Farm Credits on your first order.",
        credits = crate::services::reward_service::REFERRAL_REWARD_AMOUNT,
    )
}

pub fn whatsapp_share_url(code: &str) -> String {
    format!("https://wa.me/?text={}", encode(&referral_message(code)))
}

pub fn facebook_share_url(code: &str) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
        encode(STOREFRONT_URL),
        encode(&referral_message(code)),
    )
}

pub fn twitter_share_url(code: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        encode(&referral_message(code)),
        encode(STOREFRONT_URL),
    )
}

pub fn linkedin_share_url() -> String {
    format!(
        "https://www.linkedin.com/sharing/share-offsite/?url={}",
        encode(STOREFRONT_URL),
    )
}

pub fn mailto_share_url(code: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode("Fresh from Aadhya Farms"),
        encode(&referral_message(code)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_url_embeds_encoded_code() {
        let url = whatsapp_share_url("AADHYA-AB12CD34");
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.contains("AADHYA-AB12CD34"));
        // Spaces must be percent-encoded.
        assert!(!url.contains(' '));
    }

    #[test]
    fn mailto_has_subject_and_body() {
        let url = mailto_share_url("AADHYA-XYZ1");
        assert!(url.starts_with("mailto:?subject="));
        assert!(url.contains("&body="));
        assert!(url.contains("AADHYA-XYZ1"));
    }

    #[test]
    fn social_urls_point_at_storefront() {
        assert!(twitter_share_url("C").contains(&*encode(STOREFRONT_URL)));
        assert!(facebook_share_url("C").contains(&*encode(STOREFRONT_URL)));
        assert!(linkedin_share_url().contains(&*encode(STOREFRONT_URL)));
    }
}
