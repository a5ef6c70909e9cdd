//! HTML Views
//!
//! Small server-rendered pages. All dynamic text goes through [`escape`].

use std::fmt::Write;

use crate::application::outcome::{Flash, Route, View};

/// Render a full page for `view`, showing `flashes` above the content
pub fn render(view: &View, flashes: &[Flash]) -> String {
    let (title, body) = match view {
        View::Welcome => ("Welcome", welcome()),
        View::SignUp => ("Sign Up", sign_up_form()),
        View::SignIn => ("Sign In", sign_in_form()),
        View::SecretPage { display_name } => ("Secret Page", secret_page(display_name)),
        View::ThankYou => ("Thank You", thank_you()),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         {nav}\
         {flashes}\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n",
        nav = nav(),
        flashes = flash_list(flashes),
    )
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav() -> String {
    format!(
        "<nav>\
         <a href=\"{}\">Home</a> | \
         <a href=\"{}\">Sign Up</a> | \
         <a href=\"{}\">Sign In</a> | \
         <a href=\"{}\">Secret Page</a> | \
         <a href=\"{}\">Log Out</a>\
         </nav>\n",
        Route::Welcome,
        Route::SignUp,
        Route::SignIn,
        Route::SecretPage,
        Route::Logout,
    )
}

fn flash_list(flashes: &[Flash]) -> String {
    if flashes.is_empty() {
        return String::new();
    }

    let mut out = String::from("<ul class=\"flashes\">\n");
    for flash in flashes {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "<li class=\"flash {}\">{}</li>",
            flash.level,
            escape(&flash.message)
        );
    }
    out.push_str("</ul>\n");
    out
}

fn welcome() -> String {
    format!(
        "<h1>Welcome</h1>\n\
         <p>New here? <a href=\"{}\">Create an account</a>.</p>\n\
         <p>Already registered? <a href=\"{}\">Sign in</a>.</p>\n",
        Route::SignUp,
        Route::SignIn,
    )
}

fn sign_up_form() -> String {
    format!(
        "<h1>Sign Up</h1>\n\
         <form method=\"post\" action=\"{}\">\n\
         <label>First Name <input type=\"text\" name=\"first_name\"></label>\n\
         <label>Last Name <input type=\"text\" name=\"last_name\"></label>\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <label>Confirm Password <input type=\"password\" name=\"confirm_password\"></label>\n\
         <button type=\"submit\">Sign Up</button>\n\
         </form>\n",
        Route::SignUp,
    )
}

fn sign_in_form() -> String {
    format!(
        "<h1>Sign In</h1>\n\
         <form method=\"post\" action=\"{}\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Sign In</button>\n\
         </form>\n",
        Route::SignIn,
    )
}

fn secret_page(display_name: &str) -> String {
    format!(
        "<h1>Secret Page</h1>\n\
         <p>Welcome, {}. You are signed in.</p>\n\
         <p><a href=\"{}\">Log out</a></p>\n",
        escape(display_name),
        Route::Logout,
    )
}

fn thank_you() -> String {
    format!(
        "<h1>Thank You</h1>\n\
         <p>Your account has been created. <a href=\"{}\">Sign in</a> to continue.</p>\n",
        Route::SignIn,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<script>alert(\"x\") & 'y'</script>"),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
        assert_eq!(escape("John Doe"), "John Doe");
    }

    #[test]
    fn test_secret_page_escapes_name() {
        let html = render(
            &View::SecretPage {
                display_name: "<b>John</b>".to_string(),
            },
            &[],
        );
        assert!(html.contains("&lt;b&gt;John&lt;/b&gt;"));
        assert!(!html.contains("<b>John</b>"));
    }

    #[test]
    fn test_flashes_rendered_with_level() {
        let html = render(&View::SignIn, &[Flash::success("Bye & see you")]);
        assert!(html.contains("<li class=\"flash success\">Bye &amp; see you</li>"));
    }

    #[test]
    fn test_no_flash_list_without_flashes() {
        let html = render(&View::Welcome, &[]);
        assert!(!html.contains("flashes"));
        assert!(html.contains("<title>Welcome</title>"));
    }

    #[test]
    fn test_forms_post_to_their_routes() {
        let html = render(&View::SignUp, &[]);
        assert!(html.contains("action=\"/signup\""));
        assert!(html.contains("name=\"confirm_password\""));

        let html = render(&View::SignIn, &[]);
        assert!(html.contains("action=\"/signin\""));
    }
}
