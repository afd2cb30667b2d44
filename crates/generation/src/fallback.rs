//! Fallback snippets used when extraction finds nothing for a section
//!
//! A generation response always carries all three sections; any section the
//! model failed to produce is filled from these self-contained defaults.

/// Minimal but complete demo page
pub const FALLBACK_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Demo generated by WebGen AI</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
</head>
<body>
    <header>
        <nav>
            <div class="logo">
                <i class="fas fa-rocket"></i>
                <span>My Business</span>
            </div>
            <ul class="nav-menu">
                <li><a href="#home">Home</a></li>
                <li><a href="#services">Services</a></li>
                <li><a href="#contact">Contact</a></li>
            </ul>
        </nav>
    </header>

    <main>
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>Welcome to your website</h1>
                <p>This demo was generated automatically</p>
                <button class="cta-button" id="contact-button">
                    <i class="fas fa-phone-alt"></i> Contact us
                </button>
            </div>
        </section>

        <section id="services" class="services">
            <h2>Our Services</h2>
            <div class="services-grid">
                <div class="service-card">
                    <i class="fas fa-star"></i>
                    <h3>Main Service</h3>
                    <p>Detailed description of the service you offer.</p>
                </div>
                <div class="service-card">
                    <i class="fas fa-clock"></i>
                    <h3>Opening Hours</h3>
                    <p>Monday to Friday: 9:00 - 18:00</p>
                </div>
                <div class="service-card">
                    <i class="fas fa-map-marker-alt"></i>
                    <h3>Location</h3>
                    <p>We are located downtown</p>
                </div>
            </div>
        </section>

        <section id="contact" class="contact">
            <h2>Contact us</h2>
            <div class="contact-info">
                <p><i class="fas fa-phone"></i> Phone: (123) 456-7890</p>
                <p><i class="fas fa-envelope"></i> Email: info@mybusiness.com</p>
                <p><i class="fas fa-map-marker-alt"></i> Address: 123 Main Street</p>
            </div>
        </section>
    </main>

    <footer>
        <p>Demo generated by <strong>WebGen AI</strong> &middot; Contact us for the full version</p>
    </footer>
</body>
</html>"##;

/// Base styles for the fallback page
pub const FALLBACK_CSS: &str = r#"/* Base styles */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Inter', sans-serif;
    line-height: 1.6;
    color: #333;
    background-color: #f8f9fa;
}

header {
    background: linear-gradient(135deg, #4361ee 0%, #3a56d4 100%);
    color: white;
    padding: 1rem 0;
    box-shadow: 0 4px 12px rgba(0,0,0,0.1);
    position: sticky;
    top: 0;
    z-index: 1000;
}

nav {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 2rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.logo {
    display: flex;
    align-items: center;
    gap: 10px;
    font-size: 1.5rem;
    font-weight: bold;
}

.nav-menu {
    display: flex;
    list-style: none;
    gap: 2rem;
}

.nav-menu a {
    color: white;
    text-decoration: none;
    font-weight: 500;
}

.hero {
    padding: 6rem 2rem;
    background: linear-gradient(rgba(67, 97, 238, 0.05), rgba(114, 9, 183, 0.05));
    text-align: center;
}

.hero h1 {
    font-size: 3rem;
    margin-bottom: 1rem;
    font-weight: 700;
}

.hero p {
    font-size: 1.2rem;
    color: #666;
    margin-bottom: 2rem;
}

.cta-button {
    background: linear-gradient(135deg, #4361ee 0%, #7209b7 100%);
    color: white;
    border: none;
    padding: 1rem 2.5rem;
    border-radius: 50px;
    font-size: 1.1rem;
    font-weight: 600;
    cursor: pointer;
    display: inline-flex;
    align-items: center;
    gap: 10px;
    transition: all 0.3s ease;
    box-shadow: 0 4px 15px rgba(67, 97, 238, 0.3);
}

.cta-button:hover {
    transform: translateY(-3px);
    box-shadow: 0 8px 25px rgba(67, 97, 238, 0.4);
}

.services,
.contact {
    max-width: 1200px;
    margin: 0 auto;
    padding: 5rem 2rem;
}

.services h2,
.contact h2 {
    text-align: center;
    font-size: 2.5rem;
    margin-bottom: 3rem;
    font-weight: 700;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 2rem;
}

.service-card {
    background: white;
    padding: 2.5rem 2rem;
    border-radius: 16px;
    box-shadow: 0 10px 30px rgba(0,0,0,0.08);
    text-align: center;
    transition: all 0.3s ease;
}

.service-card:hover {
    transform: translateY(-10px);
    box-shadow: 0 20px 40px rgba(0,0,0,0.12);
}

.service-card i {
    font-size: 3rem;
    color: #4361ee;
    margin-bottom: 1.5rem;
}

.contact {
    text-align: center;
}

.contact-info {
    background: white;
    padding: 3rem;
    border-radius: 16px;
    box-shadow: 0 10px 30px rgba(0,0,0,0.08);
    max-width: 600px;
    margin: 0 auto;
}

.contact-info p {
    font-size: 1.1rem;
    margin: 1.5rem 0;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 15px;
    color: #555;
}

footer {
    text-align: center;
    padding: 3rem 2rem;
    background: #333;
    color: white;
    margin-top: 4rem;
}

@media (max-width: 768px) {
    nav {
        flex-direction: column;
        gap: 1.5rem;
        padding: 1rem;
    }

    .nav-menu {
        flex-direction: column;
        text-align: center;
        gap: 1rem;
    }

    .hero h1 {
        font-size: 2.2rem;
    }

    .services-grid {
        grid-template-columns: 1fr;
    }
}"#;

/// Interactions for the fallback page
pub const FALLBACK_JS: &str = r##"// Demo interactions
console.log('Demo generated by WebGen AI');

document.addEventListener('DOMContentLoaded', function () {
    // Smooth scrolling for in-page navigation
    var links = document.querySelectorAll('a[href^="#"]');
    links.forEach(function (link) {
        link.addEventListener('click', function (e) {
            e.preventDefault();
            var targetId = this.getAttribute('href');
            if (targetId === '#') return;

            var targetElement = document.querySelector(targetId);
            if (targetElement) {
                window.scrollTo({
                    top: targetElement.offsetTop - 80,
                    behavior: 'smooth'
                });
                history.pushState(null, null, targetId);
            }
        });
    });

    // Contact call-to-action
    var contactButton = document.getElementById('contact-button');
    if (contactButton) {
        contactButton.addEventListener('click', function () {
            var message = 'Hi, I saw my website demo and I want the full version';
            var phone = '+1234567890';
            var url = 'https://wa.me/' + phone + '?text=' + encodeURIComponent(message);
            if (confirm('Contact us on WhatsApp to get your full website?')) {
                window.open(url, '_blank');
            }
        });
    }

    // Current year in the footer
    var footer = document.querySelector('footer p');
    if (footer) {
        var year = new Date().getFullYear();
        footer.innerHTML = footer.innerHTML.replace('2024', year);
    }
});"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_html_is_a_complete_page() {
        assert!(FALLBACK_HTML.starts_with("<!DOCTYPE html>"));
        assert!(FALLBACK_HTML.contains("</html>"));
        assert!(FALLBACK_HTML.contains("id=\"contact\""));
    }

    #[test]
    fn anchor_links_survive_in_the_literals() {
        // the nav hrefs and the smooth-scroll selector both embed `"#`
        assert!(FALLBACK_HTML.contains(r##"href="#contact""##));
        assert!(FALLBACK_JS.contains(r##"a[href^="#"]"##));
    }

    #[test]
    fn fallback_sections_are_mutually_consistent() {
        // Selectors used by the JS exist in the HTML and are styled
        assert!(FALLBACK_HTML.contains("contact-button"));
        assert!(FALLBACK_JS.contains("contact-button"));
        assert!(FALLBACK_CSS.contains(".cta-button"));
        assert!(FALLBACK_HTML.contains("cta-button"));
    }

    #[test]
    fn fallback_js_has_no_denylisted_calls() {
        let safe = crate::sanitize::sanitize_js(FALLBACK_JS);
        assert_eq!(safe, FALLBACK_JS);
    }
}
