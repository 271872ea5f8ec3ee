use axum::response::Html;

use crate::types::customer::Customer;
use crate::utils::encode::encode;

pub(crate) fn index(message: Option<&str>) -> Html<String> {
    let notice = match message {
        Some(message) => format!("<p class=\"message\">{}</p>\n    ", encode(message)),
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>SQL Injection Demo</title>
</head>
<body>
    <h1>Login</h1>
    {notice}<form method="post" action="/">
        <label>Username: <input type="text" name="username"></label>
        <label>Password: <input type="password" name="password"></label>
        <label>Mode:
            <select name="login_type">
                <option value="vulnerable">Vulnerable (interpolated query)</option>
                <option value="secure">Secure (parameterized query)</option>
            </select>
        </label>
        <button type="submit">Log in</button>
    </form>
</body>
</html>
"#
    ))
}

pub(crate) fn admin(username: &str, customers: &[Customer]) -> Html<String> {
    let rows: String = customers
        .iter()
        .map(|customer| {
            format!(
                "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                customer.id,
                encode(customer.name),
                encode(customer.email),
                encode(customer.phone)
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Admin</title>
</head>
<body>
    <h1>Customer Records</h1>
    <p>Logged in as {}</p>
    <table>
        <tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th></tr>
{}    </table>
    <a href="/logout">Log out</a>
</body>
</html>
"#,
        encode(username),
        rows
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::customer::CUSTOMERS;

    #[test]
    fn index_renders_message_only_when_present() {
        assert!(!index(None).0.contains("message"));
        assert!(index(Some("Secure Login Failed! Invalid credentials."))
            .0
            .contains("Secure Login Failed!"));
    }

    #[test]
    fn admin_escapes_the_session_username() {
        let page = admin("<b>admin</b>", &CUSTOMERS);
        assert!(!page.0.contains("<b>admin</b>"));
        assert!(page.0.contains("John Doe"));
    }
}
