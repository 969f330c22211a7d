use crate::types::JobListing;
use crate::utils::escape_html;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>JobSearch Designer</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
    <div class="container mt-5">
        <h1>JobSearch Designer</h1>
        <div class="d-flex justify-content-between align-items-center mt-4">
            <h2>Job listings</h2>
            <a href="/trigger-scraping" class="btn btn-outline-secondary">Scrape now</a>
        </div>
        <input type="text" class="form-control my-3" id="jobFilter" placeholder="Filter listings...">
        <div class="list-group" id="jobList">
"#;

const PAGE_TAIL: &str = r#"        </div>
    </div>
    <script>
        document.getElementById('jobFilter').addEventListener('input', function () {
            const needle = this.value.toLowerCase();
            document.querySelectorAll('.job-item').forEach(function (item) {
                item.style.display = item.textContent.toLowerCase().includes(needle) ? '' : 'none';
            });
        });
    </script>
</body>
</html>
"#;

/// Render the listing page. Every scraped value is escaped.
pub fn render_index(listings: &[JobListing]) -> String {
    let mut html = String::from(PAGE_HEAD);

    if listings.is_empty() {
        html.push_str("            <p class=\"text-muted\">No listings yet.</p>\n");
    }

    for listing in listings {
        html.push_str(&format!(
            r#"            <div class="list-group-item job-item">
                <h5 class="mb-1">{title}</h5>
                <p class="mb-1">{company}</p>
                <p class="mb-1">{location}</p>
                <small>Source: {source} - Date: {date}</small>
                <br>
                <a href="{link}" target="_blank" rel="noopener" class="btn btn-sm btn-primary mt-2">View listing</a>
            </div>
"#,
            title = escape_html(&listing.title),
            company = escape_html(&listing.company),
            location = escape_html(&listing.location),
            source = listing.source,
            date = listing.date_added.format("%Y-%m-%d"),
            link = escape_html(&listing.link),
        ));
    }

    html.push_str(PAGE_TAIL);
    html
}
