//! Built-in sample documents
//!
//! Used by `codesplit sample`, the viewer's "load sample" key, and tests.

/// A small card page: one style block in the head, one inline script at the
/// end of the body.
pub const ANIMATED_CARD: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Animated Card</title>
<style>
body {
    background: #0f172a;
    display: flex;
    justify-content: center;
    align-items: center;
    height: 80vh;
    color: #fff;
    margin: 0;
}
.card {
    padding: 40px;
    border: 2px solid #334155;
    border-radius: 24px;
    text-align: center;
    cursor: pointer;
    transition: all 0.4s cubic-bezier(0.4, 0, 0.2, 1);
    background: rgba(30, 41, 59, 0.5);
}
.card:hover {
    border-color: #6366f1;
    transform: translateY(-10px);
}
h2 { color: #818cf8; margin-bottom: 8px; }
p { color: #94a3b8; }
</style>
</head>
<body>
<div class="card" id="btn">
<h1>Welcome to codesplit</h1>
<h2>Click Me</h2>
<p>Watch the console or alert</p>
</div>
<script>
document.getElementById('btn').onclick = () => {
    alert('Hello from codesplit!');
    console.log('Action performed!');
}
</script>
</body>
</html>"#;

/// Mixed inline and external scripts, several style blocks
pub const MIXED_ASSETS: &str = r#"<html>
<head>
<style>h1 { font-size: 2rem; }</style>
<script src="https://cdn.example.com/lib.js"></script>
<STYLE media="print">
  .no-print { display: none; }
</STYLE>
</head>
<body>
<h1 class="no-print">Report</h1>
<script type="module">
  import { start } from './app.js';
  start();
</script>
<script>window.ready = true;</script>
</body>
</html>"#;
