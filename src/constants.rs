// Selectors and class names shared by the markup, the stylesheet and the
// web frontend.

// Visualizer
pub const PROFILE_CONTAINER: &str = ".profile-pic-container";
pub const VISUALIZER_CLASS: &str = "profile-visualizer";
pub const PLAYING_CLASS: &str = "playing"; // added once analysis is live

// Dataset overrides read from the profile container
pub const PARAM_ATTRS: [&str; 2] = ["audio-src", "audio-volume"];

// Controls
pub const AUDIO_CONTROL_CLASS: &str = "audio-control";
pub const ICON_UNMUTED: &str = "<i class=\"fas fa-volume-up\"></i>";
pub const ICON_MUTED: &str = "<i class=\"fas fa-volume-mute\"></i>";

// Notification banner
pub const NOTICE_CLASS: &str = "audio-notification";
pub const NOTICE_VISIBLE_CLASS: &str = "visible";
pub const NOTICE_INITIAL_TEXT: &str = "Ocean sounds playing...";

// Project cards
pub const PROJECT_CARD: &str = ".project-card";
pub const PROJECT_DETAILS_CLASS: &str = "project-details";
pub const EXPANDED_CLASS: &str = "expanded";
pub const PROJECT_DETAILS_HTML: &str = r##"
    <p>This project showcases my skills in design and development.</p>
    <div class="project-tech">
        <span class="tech-tag">HTML</span>
        <span class="tech-tag">CSS</span>
        <span class="tech-tag">Rust</span>
    </div>
    <a href="#" class="project-link">View Project <i class="fas fa-arrow-right"></i></a>
"##;

// Links and quote
pub const CONTACT_LINK: &str = ".contact-link";
pub const BIO_QUOTE: &str = ".bio .quote";
pub const QUOTE_HINT: &str = "Click for another quote";

// Scroll crossfade
pub const FIRST_BG_VAR: &str = "--first-bg-opacity";
pub const SECOND_BG_VAR: &str = "--second-bg-opacity";
pub const SCROLLED_CLASS: &str = "scrolled";

// Particles
pub const PARTICLES_CONTAINER_CLASS: &str = "particles-container";
pub const PARTICLE_CLASS: &str = "particle";
