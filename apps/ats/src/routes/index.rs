use axum::response::Html;

/// GET /
/// Single-page upload form. Posts to the evaluate endpoint and renders the result.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Smart ATS - Resume Evaluator</title>
  <style>
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
    textarea { width: 100%; min-height: 12rem; }
    .error { color: #b00020; }
    pre { white-space: pre-wrap; background: #f4f4f4; padding: 1rem; }
  </style>
</head>
<body>
  <h1>Smart ATS - Resume Evaluator</h1>
  <p>Enhance your resume's ATS compatibility.</p>
  <form id="evaluate-form">
    <label for="job_description">Paste the job description</label>
    <textarea id="job_description" name="job_description"></textarea>
    <p>
      <label for="resume">Upload your resume (PDF)</label>
      <input id="resume" name="resume" type="file" accept="application/pdf">
    </p>
    <button type="submit">Submit</button>
  </form>
  <section id="result"></section>
  <script>
    const form = document.getElementById("evaluate-form");
    const out = document.getElementById("result");
    const text = (tag, value, cls) => {
      const el = document.createElement(tag);
      el.textContent = value;
      if (cls) el.className = cls;
      return el;
    };
    form.addEventListener("submit", async (event) => {
      event.preventDefault();
      out.replaceChildren(text("p", "Evaluating..."));
      const response = await fetch("/api/v1/evaluate", { method: "POST", body: new FormData(form) });
      const body = await response.json();
      if (response.ok) {
        out.replaceChildren(
          text("h2", "JD Match: " + body.jd_match),
          text("p", "Missing Keywords: " + body.missing_keywords),
          text("p", "Profile Summary: " + body.profile_summary),
        );
        return;
      }
      const nodes = [text("p", body.error.message, "error")];
      if (body.error.raw_response !== undefined) {
        nodes.push(text("p", "Raw AI response:"), text("pre", body.error.raw_response));
      }
      out.replaceChildren(...nodes);
    });
  </script>
</body>
</html>
"#;
