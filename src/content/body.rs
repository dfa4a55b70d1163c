/*!
 * Main body of the architecture document.
 *
 * Ten sections, each a heading followed by literal text, lists, code blocks
 * or text diagrams.
 */

use log::debug;

use super::blocks::{
    create_architecture_diagram, create_bullet_list, create_code_block, create_component_section,
    create_flow_diagram, create_section, create_topic,
};
use crate::docx::{Document, Length};
use crate::errors::DocxError;

/// Section headings of the body, in order
pub const SECTION_TITLES: [&str; 10] = [
    "🎯 RESUMEN EJECUTIVO",
    "🏗️ ARQUITECTURA GENERAL",
    "🔧 COMPONENTES DEL SISTEMA",
    "🔄 FLUJO DE DATOS",
    "📁 ESTRUCTURA DE ARCHIVOS",
    "📊 GESTIÓN DE ESTADO",
    "🌍 CONFIGURACIÓN Y ENTORNOS",
    "🎨 INTERFAZ DE USUARIO",
    "🌐 SERVICIOS Y APIs",
    "🔍 CONSIDERACIONES TÉCNICAS",
];

const SUMMARY_FEATURES: [&str; 6] = [
    "✅ Chat en tiempo real con interfaz moderna",
    "✅ Soporte para temas claro/oscuro",
    "✅ Persistencia de historial local",
    "✅ Simulación de respuestas streaming",
    "✅ Configuración multi-entorno (.env)",
    "✅ Arquitectura escalable y mantenible",
];

const STATE_MANAGEMENT_CODE: &str = r#"
// Estado centralizado
class ChatController extends ChangeNotifier {
  List<Message> _messages = [];
  bool _loading = false;
  
  List<Message> get messages => List.unmodifiable(_messages);
  bool get loading => _loading;
  
  Future<void> send(String text) async {
    _loading = true;
    notifyListeners(); // Notifica cambios
    
    // ... lógica de negocio ...
    
    _loading = false;
    notifyListeners(); // Notifica completitud
  }
}

// Consumo en UI
Widget build(BuildContext context) {
  final controller = context.watch<ChatController>();
  
  return ListView.builder(
    itemCount: controller.messages.length,
    itemBuilder: (context, index) {
      return MessageBubble(message: controller.messages[index]);
    },
  );
}
"#;

const FILE_STRUCTURE: &str = r#"
lib/
├── main.dart                          # 🚀 Punto de entrada
├── core/                             # ⚙️ Funcionalidad base
│   ├── api_client.dart              # 🌐 Cliente HTTP
│   ├── models.dart                  # 📦 Modelos de datos
│   ├── theme.dart                   # 🎨 Temas y estilos
│   └── services/                    # 🛠️ Servicios compartidos
│       ├── app_environment.dart     # 🌍 Gestión de entornos
│       ├── history_service.dart     # 💾 Persistencia local
│       ├── streaming_service.dart   # ⚡ Simulación streaming
│       └── theme_service.dart       # 🌓 Gestión de temas
└── features/                        # 🎯 Features de la app
    └── chat/                        # 💬 Feature de chat
        ├── chat_controller.dart     # 🎛️ Controlador de estado
        ├── chat_repository.dart     # 📊 Capa de datos
        ├── chat_screen.dart         # 📱 Pantalla principal
        └── widgets/                 # 🧩 Componentes UI
            ├── input_bar.dart       # ⌨️ Barra de entrada
            ├── message_bubble.dart  # 💭 Burbuja de mensaje
            ├── streaming_indicator.dart # ⚡ Indicador streaming
            └── typing_indicator.dart # ⏳ Indicador de typing
"#;

const ENV_DEV: &str = "
ENVIRONMENT=development
API_BASE_URL=http://localhost:8000/
DEBUG_MODE=true
API_TIMEOUT=30000
MAX_HISTORY_MESSAGES=100
ENABLE_LOGGING=true
";

const ENV_PROD: &str = "
ENVIRONMENT=production
API_BASE_URL=https://api.chatbot-rag.com/
DEBUG_MODE=false
API_TIMEOUT=15000
MAX_HISTORY_MESSAGES=50
ENABLE_LOGGING=false
";

const UI_COMPONENTS: [(&str, &str); 5] = [
    ("ChatScreen", "Pantalla principal con AppBar, ListView de mensajes e InputBar"),
    ("MessageBubble", "Componente de burbuja con estilos por rol (user/bot/system)"),
    ("InputBar", "Barra de entrada con TextField y botón de envío con gradiente"),
    ("TypingIndicator", "Animación de puntos cuando el bot está escribiendo"),
    ("StreamingIndicator", "Muestra texto en tiempo real con cursor parpadeante"),
];

const API_REQUEST: &str = r#"
POST /chat
{
  "message": "¿Qué es RAG?",
  "history": [
    {
      "role": "user",
      "content": "Hola",
      "timestamp": "2025-01-23T10:00:00Z"
    }
  ]
}
"#;

const API_RESPONSE: &str = r#"
{
  "answer": "RAG es una técnica de IA...",
  "timestamp": "2025-01-23T10:00:10Z",
  "status": "success"
}
"#;

const TECHNICAL_CONSIDERATIONS: [(&str, [&str; 4]); 3] = [
    ("Performance", [
        "ListView.builder para lazy loading de mensajes",
        "Provider.watch para reconstrucción selectiva de widgets",
        "const constructors para evitar reconstrucciones innecesarias",
        "Timeouts apropiados para evitar bloqueos de UI",
    ]),
    ("Seguridad", [
        "Validación y sanitización de input del usuario",
        "Manejo seguro de errores sin exposición de información sensible",
        "URLs HTTPS en producción",
        "Timeouts para prevención de ataques DoS",
    ]),
    ("Mantenibilidad", [
        "Separación clara de responsabilidades por capa",
        "Documentación en código y naming descriptivo",
        "Organización por features para escalabilidad",
        "Configuración externa mediante archivos .env",
    ]),
];

/// Append all body sections
pub fn create_main_content(doc: &mut Document) -> Result<(), DocxError> {
    // 1. Resumen ejecutivo
    create_section(
        doc,
        SECTION_TITLES[0],
        "ChatBot RAG Flutter es una aplicación móvil desarrollada en Flutter que implementa un sistema de chat inteligente con capacidades RAG (Retrieval-Augmented Generation).",
    )?;
    create_bullet_list(doc, &SUMMARY_FEATURES)?;

    // 2. Arquitectura general
    create_section(
        doc,
        SECTION_TITLES[1],
        "La aplicación sigue una arquitectura Clean Architecture con separación por capas:",
    )?;
    create_architecture_diagram(doc)?;

    // 3. Componentes del sistema
    create_section(doc, SECTION_TITLES[2], "")?;
    create_component_section(doc, "Core Components", &[
        ("ApiClient", "Cliente HTTP para comunicación con backend"),
        ("AppEnvironment", "Gestión de configuración por entornos"),
        ("Message", "Modelo de datos para mensajes del chat"),
    ])?;
    create_component_section(doc, "Services Layer", &[
        ("HistoryService", "Persistencia local con SharedPreferences"),
        ("ThemeService", "Gestión de temas claro/oscuro"),
        ("StreamingService", "Simulación de respuestas en streaming"),
    ])?;
    create_component_section(doc, "Feature: Chat", &[
        ("ChatController", "Gestión de estado con Provider"),
        ("ChatRepository", "Capa de abstracción de datos"),
        ("ChatScreen", "Interfaz principal del chat"),
    ])?;

    // 4. Flujo de datos
    create_section(
        doc,
        SECTION_TITLES[3],
        "Proceso completo desde que el usuario envía un mensaje hasta recibir la respuesta:",
    )?;
    create_flow_diagram(doc)?;

    // 5. Estructura de archivos
    create_section(doc, SECTION_TITLES[4], "")?;
    create_code_block(doc, FILE_STRUCTURE)?;

    // 6. Gestión de estado
    create_section(
        doc,
        SECTION_TITLES[5],
        "Implementación del patrón Provider + ChangeNotifier para estado reactivo:",
    )?;
    create_code_block(doc, STATE_MANAGEMENT_CODE)?;

    // 7. Configuración y entornos
    create_section(
        doc,
        SECTION_TITLES[6],
        "Sistema de configuración dinámico basado en archivos .env:",
    )?;
    create_topic(doc, "Archivo .env.dev (Desarrollo):")?;
    create_code_block(doc, ENV_DEV)?;
    create_topic(doc, "Archivo .env.prod (Producción):")?;
    create_code_block(doc, ENV_PROD)?;

    // 8. Interfaz de usuario
    create_section(doc, SECTION_TITLES[7], "")?;
    for (name, description) in UI_COMPONENTS {
        create_topic(doc, &format!("🧩 {}", name))?;
        doc.add_paragraph(description, None)?;
        doc.add_paragraph("", None)?;
    }

    // 9. Servicios y APIs
    create_section(doc, SECTION_TITLES[8], "Estructura de comunicación con el backend:")?;
    create_topic(doc, "Request al Backend:")?;
    create_code_block(doc, API_REQUEST)?;
    create_topic(doc, "Response del Backend:")?;
    create_code_block(doc, API_RESPONSE)?;

    // 10. Consideraciones técnicas
    create_section(doc, SECTION_TITLES[9], "")?;
    for (category, items) in TECHNICAL_CONSIDERATIONS {
        create_topic(doc, &format!("🔍 {}:", category))?;
        for item in items {
            let paragraph = doc.add_paragraph(&format!("• {}", item), None)?;
            paragraph.format.left_indent = Some(Length::inches(0.25));
        }
        doc.add_paragraph("", None)?;
    }

    debug!("Main content written: {} sections", SECTION_TITLES.len());
    Ok(())
}
