// --- File: crates/akshara_content/src/legal.rs ---

// Legal and transparency pages, kept as markdown the rendering layer
// formats. Edited by the organization, not by engineering.

pub const PRIVACY_POLICY: &str = r##"
# Privacy Policy

**Effective Date:** January 1, 2024

At Akshara Bharatham Society, we are committed to protecting your privacy and ensuring the security of your personal information. This Privacy Policy outlines our practices regarding the collection, use, and disclosure of your data when you visit our website or interact with our services.

## 1. Information We Collect
We collect personal information that you voluntarily provide to us when you:
- Donate to our cause via our secure payment portals.
- Register as a volunteer through our application forms.
- Subscribe to our newsletter or blog updates.
- Contact us via our contact forms or email.

This information may include your name, email address, phone number, mailing address, and payment details (which are processed securely by third-party payment gateways like Razorpay/Stripe; we do not store full credit card numbers).

## 2. How We Use Your Information
We use the information we collect for the following purposes:
- **Donation Processing:** To process your donations, issue tax-exemption receipts (80G), and keep a record of your contributions.
- **Communication:** To send you updates, newsletters, and information about our programs, events, and volunteer opportunities.
- **Improvement:** To analyze website usage trends and improve our digital services.
- **Legal Compliance:** To comply with applicable laws and regulations regarding non-profit operations.

## 3. Data Sharing and Security
We do not sell, trade, or rent your personal identification information to others. We may share generic aggregated demographic information not linked to any personal identification information regarding visitors and users with our business partners, trusted affiliates, and advertisers for the purposes outlined above.

We implement appropriate data collection, storage, and processing practices and security measures to protect against unauthorized access, alteration, disclosure, or destruction of your personal information.

## 4. Your Rights
You have the right to request access to the personal information we hold about you and to ask for your data to be corrected or deleted. You can unsubscribe from our mailing lists at any time by clicking the "unsubscribe" link in our emails.

## 5. Contact Us
If you have any questions about this Privacy Policy, the practices of this site, or your dealings with this site, please contact us at:
**Email:** aksharabharatamsociety@gmail.com
**Phone:** 072594 90606
"##;

pub const TERMS_OF_SERVICE: &str = r##"
# Terms of Service

**Last Updated:** January 1, 2024

Welcome to the Akshara Bharata Society website. By accessing or using our website, you agree to be bound by these Terms of Service and all applicable laws and regulations. If you do not agree with any of these terms, you are prohibited from using or accessing this site.

## 1. Use License
Permission is granted to temporarily download one copy of the materials (information or software) on Akshara Bharata Society's website for personal, non-commercial transitory viewing only. This is the grant of a license, not a transfer of title, and under this license, you may not:
- Modify or copy the materials;
- Use the materials for any commercial purpose, or for any public display (commercial or non-commercial);
- Attempt to decompile or reverse engineer any software contained on Akshara Bharata Society's website;
- Remove any copyright or other proprietary notations from the materials; or
- Transfer the materials to another person or "mirror" the materials on any other server.

## 2. Disclaimer
The materials on Akshara Bharata Society's website are provided on an 'as is' basis. Akshara Bharata Society makes no warranties, expressed or implied, and hereby disclaims and negates all other warranties including, without limitation, implied warranties or conditions of merchantability, fitness for a particular purpose, or non-infringement of intellectual property or other violation of rights.

## 3. Limitations
In no event shall Akshara Bharata Society or its suppliers be liable for any damages (including, without limitation, damages for loss of data or profit, or due to business interruption) arising out of the use or inability to use the materials on Akshara Bharata Society's website, even if Akshara Bharata Society or a authorized representative has been notified orally or in writing of the possibility of such damage.

## 4. Accuracy of Materials
The materials appearing on Akshara Bharata Society's website could include technical, typographical, or photographic errors. Akshara Bharata Society does not warrant that any of the materials on its website are accurate, complete, or current. We may make changes to the materials contained on its website at any time without notice.

## 5. Governing Law
These terms and conditions are governed by and construed in accordance with the laws of Andhra Pradesh, India, and you irrevocably submit to the exclusive jurisdiction of the courts in that State or location.
"##;

pub const COOKIE_POLICY: &str = r##"
# Cookie Policy

This Cookie Policy explains what cookies are, how we use them, and your choices regarding cookies.

## 1. What are cookies?
Cookies are small text files that are sent to your web browser by a website you visit. A cookie file is stored in your web browser and allows the Service or a third-party to recognize you and make your next visit easier and the Service more useful to you.

## 2. How Akshara Bharata Society uses cookies
When you use and access the Service, we may place a number of cookies files in your web browser. We use cookies for the following purposes:
- **Essential Cookies:** To enable certain functions of the Service, such as authentication and remembering your preferences.
- **Analytics Cookies:** We use analytics cookies to track information on how the Service is used so that we can make improvements. We may also use analytics cookies to test new advertisements, pages, features or new functionality of the Service to see how our users react to them.

## 3. Third-party cookies
In addition to our own cookies, we may also use various third-parties cookies to report usage statistics of the Service, deliver advertisements on and through the Service, and so on.

## 4. What are your choices regarding cookies?
If you'd like to delete cookies or instruct your web browser to delete or refuse cookies, please visit the help pages of your web browser. Please note, however, that if you delete cookies or refuse to accept them, you might not be able to use all of the features we offer, you may not be able to store your preferences, and some of our pages might not display properly.
"##;

pub const FINANCIAL_REPORTS: &str = r##"
# Financial Reports & Transparency

Transparency is one of the core pillars of Akshara Bharata Society. We believe our donors and stakeholders have the right to know exactly how their contributions are being utilized to impact lives.

## Financial Year 2023-2024 Overview
- **Total Donations Received:** ₹50,00,000
- **Total Expenditure:** ₹48,50,000
- **Surplus carried forward:** ₹1,50,000

### Expenditure Breakdown
1.  **Program Expenses (80%):** Direct costs related to running schools, buying books, teacher salaries, and digital lab setups.
2.  **Administrative Expenses (10%):** Office rent, utilities, and staff salaries.
3.  **Fundraising Expenses (10%):** Event costs and marketing.

## Audited Financial Statements
We undergo annual audits by independent chartered accountants to ensure compliance with all financial regulations.

- **[Download FY 2023-24 Audit Report (PDF)](#)** _(Placeholder)_
- **[Download FY 2022-23 Audit Report (PDF)](#)** _(Placeholder)_
- **[Download FY 2021-22 Audit Report (PDF)](#)** _(Placeholder)_

## FCRA Compliance
Akshara Bharata Society is fully compliant with the Foreign Contribution Regulation Act (FCRA) and is eligible to receive foreign funds. Our FCRA registration number is available upon request.

For any specific financial queries, please reach out to our Finance Officer at finance@aksharabharatam.org.
"##;
