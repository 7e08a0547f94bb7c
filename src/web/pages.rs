//! HTML pages. Only numbers and fixed enum strings are interpolated, so no escaping is needed.

use crate::imagery::ImageBucket;
use crate::life_table::{AGE_CEILING, Gender};

const STYLESHEET: &str = "/static/css/style.css";

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="{STYLESHEET}">
</head>
<body>
  <main>
{body}
  </main>
</body>
</html>
"#
    )
}

pub fn landing() -> String {
    let body = format!(
        r#"    <h1>Momento Mori</h1>
    <p class="subtitle">Anti-Procrastination App</p>
    <form action="/expectancy" method="get">
      <label for="age">Age</label>
      <input id="age" name="age" type="number" min="0" max="{AGE_CEILING}" required>
      <label for="gender">Gender</label>
      <select id="gender" name="gender" required>
        <option value="{male}">Male</option>
        <option value="{female}">Female</option>
      </select>
      <button type="submit">How long do I have?</button>
    </form>"#,
        male = Gender::Male,
        female = Gender::Female,
    );
    layout("Momento Mori", &body)
}

pub fn result(years_remaining: f64, bucket: ImageBucket) -> String {
    let body = format!(
        r#"    <h1>Momento Mori</h1>
    <figure class="bucket-{bucket_class}">
      <img src="{src}" alt="{alt}">
    </figure>
    <p class="years"><strong>{years_remaining:.1}</strong> years left</p>
    <p><a href="/">Back</a></p>"#,
        bucket_class = bucket_class(bucket),
        src = bucket.url(),
        alt = bucket.alt_text(),
    );
    layout("Momento Mori - Your time", &body)
}

pub fn too_old() -> String {
    let body = r#"    <h1>Momento Mori</h1>
    <p>No one on record has lived this long.</p>
    <blockquote>
      Look closer at The Ambassadors by Hans Holbein the Younger: the smear across the
      floor is a skull. It was always in the picture.
    </blockquote>
    <p><a href="/">Back</a></p>"#;
    layout("Momento Mori - Beyond the table", body)
}

fn bucket_class(bucket: ImageBucket) -> &'static str {
    match bucket {
        ImageBucket::Gentle => "gentle",
        ImageBucket::Mild => "mild",
        ImageBucket::Moderate => "moderate",
        ImageBucket::Severe => "severe",
    }
}
