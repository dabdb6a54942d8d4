//! Reset-password email template.
//!
//! A single self-contained HTML document with inline styles; the inputs are
//! already-localized strings plus the branded chrome (logo, origin).

/// Inputs for the reset-password email body.
#[derive(Debug, Clone)]
pub struct ResetEmailArgs {
    /// Application name shown in the header
    pub brand: String,
    /// Site origin the logo links back to
    pub origin: String,
    /// Absolute logo URL
    pub logo_src: String,
    /// Localized heading
    pub forgot_password_text: String,
    /// Localized body copy
    pub forgot_password_des: String,
    /// Localized call-to-action label
    pub forgot_password_btn_text: String,
    /// The reset link the button points at
    pub forgot_password_btn_link: String,
}

/// Render the reset-password email HTML.
pub fn render_reset_email(args: &ResetEmailArgs) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{brand}</title>
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 24px; background-color: #f5f5f5; color: #333;">
    <div style="max-width: 560px; margin: 0 auto; background-color: #fff; border-radius: 8px; padding: 32px;">
        <a href="{origin}" style="display: inline-block; margin-bottom: 24px;">
            <img src="{logo_src}" alt="{brand}" style="height: 32px;">
        </a>
        <h2 style="margin: 0 0 12px;">{heading}</h2>
        <p style="margin: 0 0 24px; color: #555;">{body}</p>
        <p style="margin: 0 0 32px;">
            <a href="{link}" style="background-color: #000; color: #fff; padding: 12px 24px; text-decoration: none; border-radius: 4px; display: inline-block;">{cta}</a>
        </p>
        <p style="color: #999; font-size: 12px; margin: 0;">
            If the button doesn't work, copy this link into your browser:<br>
            <a href="{link}" style="color: #007aff;">{link}</a>
        </p>
    </div>
</body>
</html>"#,
        brand = args.brand,
        origin = args.origin,
        logo_src = args.logo_src,
        heading = args.forgot_password_text,
        body = args.forgot_password_des,
        cta = args.forgot_password_btn_text,
        link = args.forgot_password_btn_link,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_embeds_inputs() {
        let html = render_reset_email(&ResetEmailArgs {
            brand: "Sitegate".to_string(),
            origin: "https://example.com".to_string(),
            logo_src: "https://example.com/favicon.png".to_string(),
            forgot_password_text: "Forgot your password?".to_string(),
            forgot_password_des: "Click below to reset it.".to_string(),
            forgot_password_btn_text: "Reset password".to_string(),
            forgot_password_btn_link: "https://example.com/settings/reset-password/tok123"
                .to_string(),
        });

        assert!(html.contains("Forgot your password?"));
        assert!(html.contains("https://example.com/settings/reset-password/tok123"));
        assert!(html.contains("https://example.com/favicon.png"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
