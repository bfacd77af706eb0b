use serde::{Deserialize, Serialize};

/// Installation phase a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Pré-Instalação")]
    PreInstallation,
    #[serde(rename = "Instalação")]
    Installation,
    #[serde(rename = "Pós-Instalação")]
    PostInstallation,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::PreInstallation => "Pré-Instalação",
            Topic::Installation => "Instalação",
            Topic::PostInstallation => "Pós-Instalação",
        }
    }

    pub fn parse(label: &str) -> Option<Topic> {
        match label.trim() {
            "Pré-Instalação" => Some(Topic::PreInstallation),
            "Instalação" => Some(Topic::Installation),
            "Pós-Instalação" => Some(Topic::PostInstallation),
            _ => None,
        }
    }
}

/// Completion state of a single task.
///
/// The wire labels are the ones the checklist file format uses, so the
/// serde renames must stay in sync with [`Status::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "TRUE")]
    Done,
    #[default]
    #[serde(rename = "FALSE")]
    NotDone,
    #[serde(rename = "NÃO SE APLICA")]
    NotApplicable,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Done => "TRUE",
            Status::NotDone => "FALSE",
            Status::NotApplicable => "NÃO SE APLICA",
        }
    }

    /// Next status in selector order: TRUE, FALSE, NÃO SE APLICA.
    pub fn cycle(&self) -> Status {
        match self {
            Status::Done => Status::NotDone,
            Status::NotDone => Status::NotApplicable,
            Status::NotApplicable => Status::Done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub topic: Topic,
    pub task: String,
    pub status: Status,
}

/// Fixed task catalog. Topic assignment and task texts never change after
/// seeding; only statuses are mutable.
const CATALOG: &[(Topic, &str)] = &[
    (Topic::PreInstallation, "Coletar no mínimo 3 lacres de cada bomba"),
    (Topic::PreInstallation, "Validar a estrutura de Tanques"),
    (Topic::PreInstallation, "Deixar todos os caixas importados no LBC"),
    (Topic::PreInstallation, "Deixar todas as NFs lançadas no LBC"),
    (Topic::PreInstallation, "Conferir Nome dos colaboradores no Cofre"),
    (Topic::PreInstallation, "Validar preço de Venda Dos Combustíveis"),
    (Topic::PreInstallation, "Sangria e Coleta Antes do Fechamento"),
    (Topic::Installation, "Realizar corte do carro forte no LBC"),
    (Topic::Installation, "Conferir saldo LBC VS Cofre"),
    (Topic::Installation, "Coletar Medição dos tanques"),
    (Topic::Installation, "Coletar Encerrantes digital de todos os bicos"),
    (Topic::Installation, "Importar último caixa no LBC"),
    (Topic::Installation, "Validar Medição de Tanques (LMC)"),
    (Topic::Installation, "Validar Preço de Custo dos Combustíveis no LBC"),
    (Topic::PostInstallation, "Abrir o primeiro caixa com o usuário do gerente"),
    (Topic::PostInstallation, "Validar (hexa), fazer aferição em todos os bicos"),
    (Topic::PostInstallation, "Conferir CNPJ nas POS"),
    (Topic::PostInstallation, "Testar meios de pagamento (Pix,Credito, Debito, Dinheiro e B2B)"),
    (Topic::PostInstallation, "Validar se está pedindo codigo de vendedor somente em produtos comissionados"),
    (Topic::PostInstallation, "Em Loja, Fazer teste com produtos que mais vendem"),
    (Topic::PostInstallation, "Em Automotivo, Fazer teste com Oleo mais vendido"),
    (Topic::PostInstallation, "Conferir saldo de estoque no PDV (Após ok da Auditoria)"),
    (Topic::PostInstallation, "Fazer corte de caixa após 30 minutos de testes (Conferir Encerrantes)"),
    (Topic::PostInstallation, "Postos de Rodovia, Emitir danfe no PDV"),
    (Topic::PostInstallation, "Baixa de aferição em todos os tipos de combustíveis"),
    (Topic::PostInstallation, "Testar baixa na POS"),
    (Topic::PostInstallation, "Baixar o restante das Aferições"),
];

/// Ordered sequence of checklist items for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Checklist {
    /// Builds the full catalog with every status set to not done.
    pub fn seeded() -> Self {
        let items = CATALOG
            .iter()
            .map(|&(topic, task)| ChecklistItem {
                topic,
                task: task.to_string(),
                status: Status::NotDone,
            })
            .collect();
        Self { items }
    }

    pub fn from_items(items: Vec<ChecklistItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&ChecklistItem> {
        self.items.get(index)
    }

    pub fn set_status(&mut self, index: usize, status: Status) {
        if let Some(item) = self.items.get_mut(index) {
            item.status = status;
        }
    }

    pub fn cycle_status(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.status = item.status.cycle();
        }
    }

    /// Sets every item back to not done.
    pub fn reset(&mut self) {
        for item in &mut self.items {
            item.status = Status::NotDone;
        }
    }

    /// Topics in display order: Pré-Instalação always first, remaining
    /// topics in first-seen order.
    pub fn topics(&self) -> Vec<Topic> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.topic) {
                seen.push(item.topic);
            }
        }
        if let Some(pos) = seen.iter().position(|&t| t == Topic::PreInstallation) {
            let pre = seen.remove(pos);
            seen.insert(0, pre);
        }
        seen
    }

    /// Item indices in display order: grouped by [`Checklist::topics`],
    /// row order preserved within each group.
    pub fn display_indices(&self) -> Vec<usize> {
        let mut indices = Vec::with_capacity(self.items.len());
        for topic in self.topics() {
            for (i, item) in self.items.iter().enumerate() {
                if item.topic == topic {
                    indices.push(i);
                }
            }
        }
        indices
    }

    pub fn find_task(&self, task: &str) -> Option<usize> {
        self.items.iter().position(|item| item.task == task)
    }

    pub fn done_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == Status::Done)
            .count()
    }
}
