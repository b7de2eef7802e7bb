pub const FACE_CASCADE_FILE: &str = "haarcascade_frontalface_default.xml";
pub const MOUTH_CASCADE_FILE: &str = "haarcascade_smile.xml";

/// Environment variable naming a directory to search for cascade files.
pub const CASCADE_DIR_ENV: &str = "MOUTHTONE_CASCADE_DIR";

pub const WINDOW_TITLE: &str = "Detecção de Faces e Boca com Feedback";

/// Stroke color for detected mouth boxes (BGR).
pub const MOUTH_BOX_COLOR: [u8; 3] = [0, 255, 0];
pub const MOUTH_BOX_THICKNESS: usize = 2;

/// On-screen label color (BGR) and its top-left anchor.
pub const LABEL_COLOR: [u8; 3] = [255, 255, 255];
pub const LABEL_ORIGIN: (i32, i32) = (10, 30);

pub const NO_DETECTION_MESSAGE: &str = "Nenhuma detecção realizada para exibir.";
