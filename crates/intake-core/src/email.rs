//! Admin notification rendering.
//!
//! Rendering is pure: given a submission and the organisation profile it
//! produces a subject plus dual-format (HTML + plain text) bodies.
//! Dispatch lives behind [`crate::mailer::Mailer`].
//!
//! User-supplied fields are HTML-escaped before substitution into the
//! HTML body. The plain-text body carries them verbatim.

use crate::submission::{COMPANY_NOT_PROVIDED, Submission};

/// Organisation identity shown in the email footer.
#[derive(Debug, Clone)]
pub struct OrgProfile {
  pub name:    String,
  pub website: String,
}

/// A rendered notification, not yet addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
  pub subject:   String,
  pub text_body: String,
  pub html_body: String,
}

/// Render the admin notification for `submission`.
pub fn render(submission: &Submission, org: &OrgProfile) -> EmailContent {
  EmailContent {
    subject:   render_subject(submission),
    text_body: render_text(submission, org),
    html_body: render_html(submission, org),
  }
}

/// Subject line: the submitter's name, plus the interest label in
/// brackets when one was specified.
fn render_subject(submission: &Submission) -> String {
  if submission.has_interest() {
    format!(
      "📩 New Contact Inquiry - {} [{}]",
      submission.name, submission.interest_label,
    )
  } else {
    format!("📩 New Contact Inquiry - {}", submission.name)
  }
}

fn render_text(submission: &Submission, org: &OrgProfile) -> String {
  format!(
    "\
NEW CONTACT FORM SUBMISSION
============================

Name: {name}
Email: {email}
Company: {company}
Interest: {interest}

Message:
{message}

--
{org_name}
{org_website}
",
    name = submission.name,
    email = submission.email,
    company = submission.company,
    interest = submission.interest_label,
    message = submission.message,
    org_name = org.name,
    org_website = org.website,
  )
}

fn render_html(submission: &Submission, org: &OrgProfile) -> String {
  // The sentinel renders muted; a real company name renders plain.
  let company = if submission.company == COMPANY_NOT_PROVIDED {
    format!("<span style=\"color: #64748b;\">{COMPANY_NOT_PROVIDED}</span>")
  } else {
    escape_html(&submission.company)
  };

  format!(
    r#"<html>
<head>
    <style>
        body {{
            font-family: Arial, sans-serif;
            background-color: #0a0f1c;
            padding: 20px;
            margin: 0;
        }}
        .container {{
            max-width: 600px;
            margin: 0 auto;
            background: #1e293b;
            padding: 30px;
            border-radius: 12px;
            border: 1px solid #334155;
        }}
        h2 {{
            color: #ffffff;
            border-bottom: 3px solid #8b5cf6;
            padding-bottom: 12px;
            margin-top: 0;
        }}
        .field-label {{
            font-size: 12px;
            color: #8b5cf6;
            text-transform: uppercase;
            letter-spacing: 1px;
            margin-bottom: 4px;
        }}
        .field-value {{
            font-size: 16px;
            color: #ffffff;
            margin-bottom: 20px;
        }}
        .field-value a {{
            color: #a78bfa;
            text-decoration: none;
        }}
        .interest-badge {{
            display: inline-block;
            background: rgba(139, 92, 246, 0.2);
            color: #a78bfa;
            padding: 6px 12px;
            border-radius: 20px;
            font-size: 14px;
            border: 1px solid rgba(139, 92, 246, 0.3);
        }}
        .message-box {{
            background: #0f172a;
            border-left: 4px solid #8b5cf6;
            padding: 16px;
            border-radius: 0 8px 8px 0;
            color: #94a3b8;
            font-style: italic;
            line-height: 1.6;
        }}
        .footer {{
            margin-top: 30px;
            padding-top: 20px;
            border-top: 1px solid #334155;
            font-size: 12px;
            text-align: center;
            color: #64748b;
        }}
        .footer a {{
            color: #8b5cf6;
            text-decoration: none;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h2>🚀 New Contact Form Submission</h2>

        <div class="field-label">Name</div>
        <div class="field-value">{name}</div>

        <div class="field-label">Email</div>
        <div class="field-value"><a href="mailto:{email}">{email}</a></div>

        <div class="field-label">Company</div>
        <div class="field-value">{company}</div>

        <div class="field-label">Interest Area</div>
        <div class="field-value">
            <span class="interest-badge">{interest}</span>
        </div>

        <div class="field-label">Message</div>
        <div class="message-box">{message}</div>

        <div class="footer">
            This notification was sent automatically by {org_name}.<br>
            <a href="{org_website}">{org_website}</a>
        </div>
    </div>
</body>
</html>
"#,
    name = escape_html(&submission.name),
    email = escape_html(&submission.email),
    company = company,
    interest = escape_html(&submission.interest_label),
    message = escape_html(&submission.message),
    org_name = escape_html(&org.name),
    org_website = org.website,
  )
}

/// Minimal HTML escaping for text interpolated into the template.
///
/// `&` must be replaced first or the later entities would be re-escaped.
fn escape_html(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
    .replace('\'', "&#39;")
}
