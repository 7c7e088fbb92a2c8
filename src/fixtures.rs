//! HTML snapshots shaped like the markup Streamlit renders for each widget.

pub const BUTTON_CLICK_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>button_click</title></head>
<body>
  <div class="main">
    <div class="element-container">
      <div class="row-widget stButton" data-testid="stButton">
        <button kind="secondary" class="css-7ym5gk">
          <div data-testid="stMarkdownContainer"><p>Click Me</p></div>
        </button>
      </div>
    </div>
    <div class="element-container">
      <div data-testid="stMarkdownContainer"><p>You clicked me!</p></div>
    </div>
  </div>
</body>
</html>"#;

pub const NUMBER_INPUT_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>number_input</title></head>
<body>
  <div class="main">
    <div class="stNumberInput" data-testid="stNumberInput">
      <label data-testid="stWidgetLabel"><div data-testid="stMarkdownContainer"><p>First Number</p></div></label>
      <div data-baseweb="input">
        <input type="number" value="0.00" aria-label="First Number">
        <div><button class="step-down">-</button><button class="step-up">+</button></div>
      </div>
    </div>
    <div class="stNumberInput" data-testid="stNumberInput">
      <label data-testid="stWidgetLabel"><div data-testid="stMarkdownContainer"><p>Second Number</p></div></label>
      <div data-baseweb="input">
        <input type="number" value="0.00" aria-label="Second Number">
        <div><button class="step-down">-</button><button class="step-up">+</button></div>
      </div>
    </div>
    <div class="row-widget stButton" data-testid="stButton">
      <button kind="secondary"><div data-testid="stMarkdownContainer"><p>Add</p></div></button>
    </div>
    <div data-testid="stMarkdownContainer"><p>3</p></div>
  </div>
</body>
</html>"#;

pub const SELECTBOX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>selectbox</title></head>
<body>
  <div class="main">
    <div class="row-widget stSelectbox" data-testid="stSelectbox">
      <label data-testid="stWidgetLabel"><div data-testid="stMarkdownContainer"><p>Subpage Navigator</p></div></label>
      <div data-baseweb="select">
        <div><div>First Page</div><input aria-autocomplete="list" aria-expanded="false" role="combobox" value=""></div>
      </div>
    </div>
    <div data-testid="stMarkdownContainer"><p>Hello this is the Second Page</p></div>
  </div>
</body>
</html>"#;

pub const FILE_UPLOAD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>file_upload</title></head>
<body>
  <div class="main">
    <div data-testid="stFileUploader">
      <label data-testid="stWidgetLabel"><div data-testid="stMarkdownContainer"><p>Upload a file</p></div></label>
      <section data-testid="stFileUploadDropzone">
        <input type="file" data-testid="stDropzoneInput" style="display: none;">
        <div><span>Drag and drop file here</span><small>Limit 200MB per file</small></div>
        <button kind="secondary">Browse files</button>
      </section>
    </div>
    <div data-testid="stMarkdownContainer"><p>test.csv</p></div>
  </div>
</body>
</html>"#;

pub const RADIO_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>radio</title></head>
<body>
  <div class="main">
    <div class="row-widget stRadio" data-testid="stRadio">
      <label data-testid="stWidgetLabel"><div data-testid="stMarkdownContainer"><p>Subpage Navigator</p></div></label>
      <div role="radiogroup">
        <label data-baseweb="radio"><input type="radio" checked><div><p>First Page</p></div></label>
        <label data-baseweb="radio"><input type="radio"><div><p>Second Page</p></div></label>
        <label data-baseweb="radio"><input type="radio"><div><p>Third Page</p></div></label>
      </div>
    </div>
    <div data-testid="stMarkdownContainer"><p>Hello this is the Second Page</p></div>
  </div>
</body>
</html>"#;

/// One of every widget kind, with a few deliberately awkward cases:
/// two text inputs share the label "Notes", two radio groups share the label
/// "Size" and the first repeats an option, two buttons read "Add", and an
/// uploader carries the class name but not the test id.
pub const WIDGET_GALLERY: &str = r#"<!DOCTYPE html>
<html>
<head><title>gallery</title></head>
<body>
  <div class="main">
    <div class="stNumberInput">
      <label><div><p>First Number</p></div></label>
      <div><input type="number" value="0.00" aria-label="First Number"></div>
    </div>
    <div class="stNumberInput">
      <label><div><p>Second Number</p></div></label>
      <div><input type="number" value="0.00" aria-label="Second Number"></div>
    </div>
    <div class="stTextInput">
      <label><div><p>Name</p></div></label>
      <div><input type="text" value="placeholder text"></div>
    </div>
    <div class="stTextInput">
      <label><div><p>Notes</p></div></label>
      <div><input type="text" id="notes-first"></div>
    </div>
    <div class="stTextInput">
      <label><div><p>Notes</p></div></label>
      <div><input type="text" id="notes-second"></div>
    </div>
    <div class="stSelectbox">
      <label><div><p>Favourite colour</p></div></label>
      <div><input role="combobox" value=""></div>
    </div>
    <div class="stCheckbox">
      <label><span class="box"></span><div><p>Accept terms</p></div></label>
    </div>
    <div class="stRadio">
      <label><div><p>Size</p></div></label>
      <div role="radiogroup">
        <label><input type="radio"><div><p>Small</p></div></label>
        <label><input type="radio"><div><p>Medium</p></div></label>
        <label><input type="radio"><div><p>Medium</p></div></label>
      </div>
    </div>
    <div class="stRadio" id="size-again">
      <label><div><p>Size</p></div></label>
      <div role="radiogroup">
        <label><input type="radio"><div><p>Large</p></div></label>
      </div>
    </div>
    <div data-testid="stFileUploader">
      <label><div><p>Upload a file</p></div></label>
      <section><input type="file"><button>Browse files</button></section>
    </div>
    <div class="stFileUploader">
      <label><div><p>Legacy upload</p></div></label>
      <section><input type="file"></section>
    </div>
    <div class="stButton"><button id="add"><div><p>Add</p></div></button></div>
    <div class="stButton"><button id="reset"><div><p>Reset</p></div></button></div>
    <div class="stButton"><button id="add-again"><div><p>Add</p></div></button></div>
  </div>
</body>
</html>"#;
