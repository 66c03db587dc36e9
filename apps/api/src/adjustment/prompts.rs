// Prompt text for the workload-adjustment assessment.
// Section headers are never written literally here: they come from
// `sections::SECTION_PATTERNS` so the parser always recognizes them.

use crate::adjustment::models::MetricsInput;
use crate::adjustment::sections::{pattern, SectionField};

/// Persona preamble placed at the top of every prompt.
pub const PERSONA: &str = "Você é o \"SoulBalance AI\", um consultor de produtividade focado em bem-estar. \
    Sua função é analisar dados diários de bem-estar e performance de um usuário para fornecer \
    **ajustes de carga de trabalho e recomendações de autocuidado**.";

pub const OBJECTIVE: &str = "**OBJETIVO:** Garantir a performance sustentável do usuário, \
    evitando o burnout e otimizando a recuperação.";

/// Builds the full instruction string for one set of metrics.
/// Deterministic: the same metrics always yield the same prompt.
pub fn build_prompt(metrics: &MetricsInput) -> String {
    let diagnosis = pattern(SectionField::Diagnosis).canonical();
    let load = pattern(SectionField::LoadAdjustment).canonical();
    let self_care = pattern(SectionField::SelfCare).canonical();
    let day_plan = pattern(SectionField::DayPlan).canonical();

    format!(
        r#"{PERSONA}

{OBJECTIVE}

**ENTRADA DE DADOS:**

* **Status de Recuperação (0-10):** {rec}
* **Fadiga Percebida (0-10):** {fad}
* **Nível de Foco (0-10):** {foc}
* **Horas de Sono (última noite):** {sleep}
* **Tipo de Tarefa/Missão Principal do Dia:** {task}

**INSTRUÇÕES DE SAÍDA:**

Responda em português, usando exatamente os títulos abaixo, cada um no início de uma linha e seguido de dois-pontos.

1. **{diagnosis}:** Avalie o estado do usuário (ex: "Sinais de fadiga leve, foco baixo").
2. **{load} (Se Necessário):**
   * Se a Recuperação for alta (> 7) e a Fadiga baixa (< 3), recomende **manter a carga ou focar em tarefas complexas**.
   * Se a Recuperação for baixa (< 5) ou a Fadiga alta (> 6), recomende **redução de carga** (ex: reduzir duração da tarefa em 20%) e/ou **troca de foco** (ex: priorizar soft skills ou atividades criativas).
3. **{self_care} (Obrigatória):** Sugira 1 ou 2 ações específicas (pausa, meditação, exercício leve) com base na análise, uma por linha, cada linha começando com "- ".
4. **{day_plan} (Opcional):** Se for útil, proponha uma sequência de blocos para o dia, um por linha, cada linha começando com "- ".
"#,
        rec = metrics.recovery_status,
        fad = metrics.perceived_fatigue,
        foc = metrics.focus_level,
        sleep = metrics.sleep_hours,
        task = metrics.main_task.trim(),
    )
}
