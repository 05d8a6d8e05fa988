//! The variant catalogue.
//!
//! Every node kind is declared once here. `with_node_catalogue!` hands the
//! whole table to a callback macro, which expands it into `SyntaxKind`, the
//! per-kind data structs, `NodeData` and the visitor traits.
//!
//! Entry grammar:
//!
//! ```text
//! Kind(KindData) visit_kind [CATEGORY | ...] {
//!     scalars { field: Type => Tag, ... }
//!     slots { field: required|optional|list(ACCEPTED | ...) => Tag, ... }
//! }
//! ```
//!
//! Slots are listed in search order for `remove`/`replace`: the kind's own
//! slots first, then `modifiers` and `annotations`.

/// Storage type of a slot shape.
macro_rules! slot_storage {
    (required) => { $crate::base::NodeIndex };
    (optional) => { $crate::base::NodeIndex };
    (list) => { $crate::base::NodeList };
}

macro_rules! slot_shape {
    (required) => { $crate::kind::SlotShape::Required };
    (optional) => { $crate::kind::SlotShape::Optional };
    (list) => { $crate::kind::SlotShape::List };
}

macro_rules! categories {
    ($($cat:ident)|+) => {
        $crate::kind::NodeCategory::from_bits_retain(0 $(| $crate::kind::NodeCategory::$cat.bits())+)
    };
}

macro_rules! with_node_catalogue {
    ($callback:ident) => {
        $callback! {
            // -----------------------------------------------------------------
            // Compilation units and names
            // -----------------------------------------------------------------

            /// A source file: package, imports, type declarations or a module.
            CompilationUnit(CompilationUnitData) visit_compilation_unit [COMPILATION_UNIT] {
                scalars {}
                slots {
                    package: optional(PACKAGE_DECLARATION) => Package,
                    imports: list(IMPORT_DECLARATION) => Imports,
                    types: list(TYPE_DECLARATION) => Types,
                    module: optional(MODULE_DECLARATION) => Module,
                }
            }
            PackageDeclaration(PackageDeclarationData) visit_package_declaration [PACKAGE_DECLARATION] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            ImportDeclaration(ImportDeclarationData) visit_import_declaration [IMPORT_DECLARATION] {
                scalars {
                    is_static: bool => Static,
                    is_asterisk: bool => Asterisk,
                }
                slots {
                    name: required(NAME) => Name,
                }
            }
            /// A possibly qualified name such as `java.util.List`.
            Name(NameData) visit_name [NAME] {
                scalars {
                    identifier: String => Identifier,
                }
                slots {
                    qualifier: optional(NAME) => Qualifier,
                }
            }
            SimpleName(SimpleNameData) visit_simple_name [SIMPLE_NAME] {
                scalars {
                    identifier: String => Identifier,
                }
                slots {}
            }
            Modifier(ModifierData) visit_modifier [MODIFIER] {
                scalars {
                    keyword: $crate::modifiers::Keyword => Keyword,
                }
                slots {}
            }
            MarkerAnnotationExpr(MarkerAnnotationExprData) visit_marker_annotation_expr [ANNOTATION | EXPRESSION] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                }
            }
            SingleMemberAnnotationExpr(SingleMemberAnnotationExprData) visit_single_member_annotation_expr [ANNOTATION | EXPRESSION] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                    member_value: required(EXPRESSION) => MemberValue,
                }
            }

            // -----------------------------------------------------------------
            // Declarations
            // -----------------------------------------------------------------

            /// A class or an interface, depending on `is_interface`.
            ClassOrInterfaceDeclaration(ClassOrInterfaceDeclarationData) visit_class_or_interface_declaration [TYPE_DECLARATION | BODY_DECLARATION] {
                scalars {
                    is_interface: bool => Interface,
                }
                slots {
                    name: required(SIMPLE_NAME) => Name,
                    type_parameters: list(TYPE_PARAMETER) => TypeParameters,
                    extended_types: list(CLASS_TYPE) => ExtendedTypes,
                    implemented_types: list(CLASS_TYPE) => ImplementedTypes,
                    members: list(BODY_DECLARATION) => Members,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            EnumDeclaration(EnumDeclarationData) visit_enum_declaration [TYPE_DECLARATION | BODY_DECLARATION] {
                scalars {}
                slots {
                    name: required(SIMPLE_NAME) => Name,
                    implemented_types: list(CLASS_TYPE) => ImplementedTypes,
                    entries: list(ENUM_CONSTANT) => Entries,
                    members: list(BODY_DECLARATION) => Members,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            EnumConstantDeclaration(EnumConstantDeclarationData) visit_enum_constant_declaration [ENUM_CONSTANT] {
                scalars {}
                slots {
                    name: required(SIMPLE_NAME) => Name,
                    arguments: list(EXPRESSION) => Arguments,
                    class_body: list(BODY_DECLARATION) => ClassBody,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            AnnotationDeclaration(AnnotationDeclarationData) visit_annotation_declaration [TYPE_DECLARATION | BODY_DECLARATION] {
                scalars {}
                slots {
                    name: required(SIMPLE_NAME) => Name,
                    members: list(BODY_DECLARATION) => Members,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            AnnotationMemberDeclaration(AnnotationMemberDeclarationData) visit_annotation_member_declaration [BODY_DECLARATION] {
                scalars {}
                slots {
                    ty: required(TYPE) => Type,
                    name: required(SIMPLE_NAME) => Name,
                    default_value: optional(EXPRESSION) => DefaultValue,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            FieldDeclaration(FieldDeclarationData) visit_field_declaration [BODY_DECLARATION] {
                scalars {}
                slots {
                    variables: list(VARIABLE_DECLARATOR) => Variables,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            VariableDeclarator(VariableDeclaratorData) visit_variable_declarator [VARIABLE_DECLARATOR] {
                scalars {}
                slots {
                    ty: required(TYPE) => Type,
                    name: required(SIMPLE_NAME) => Name,
                    initializer: optional(EXPRESSION) => Initializer,
                }
            }
            /// A method. Abstract and interface methods have no body.
            MethodDeclaration(MethodDeclarationData) visit_method_declaration [BODY_DECLARATION] {
                scalars {}
                slots {
                    type_parameters: list(TYPE_PARAMETER) => TypeParameters,
                    ty: required(TYPE) => Type,
                    name: required(SIMPLE_NAME) => Name,
                    parameters: list(PARAMETER) => Parameters,
                    thrown_exceptions: list(CLASS_TYPE) => ThrownExceptions,
                    body: optional(BLOCK) => Body,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            ConstructorDeclaration(ConstructorDeclarationData) visit_constructor_declaration [BODY_DECLARATION] {
                scalars {}
                slots {
                    type_parameters: list(TYPE_PARAMETER) => TypeParameters,
                    name: required(SIMPLE_NAME) => Name,
                    parameters: list(PARAMETER) => Parameters,
                    thrown_exceptions: list(CLASS_TYPE) => ThrownExceptions,
                    body: required(BLOCK) => Body,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            InitializerDeclaration(InitializerDeclarationData) visit_initializer_declaration [BODY_DECLARATION] {
                scalars {
                    is_static: bool => Static,
                }
                slots {
                    body: required(BLOCK) => Body,
                }
            }
            Parameter(ParameterData) visit_parameter [PARAMETER] {
                scalars {
                    is_var_args: bool => VarArgs,
                }
                slots {
                    ty: required(TYPE) => Type,
                    name: required(SIMPLE_NAME) => Name,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            TypeParameter(TypeParameterData) visit_type_parameter [TYPE_PARAMETER] {
                scalars {}
                slots {
                    name: required(SIMPLE_NAME) => Name,
                    type_bound: list(CLASS_TYPE) => TypeBound,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }

            // -----------------------------------------------------------------
            // Modules
            // -----------------------------------------------------------------

            ModuleDeclaration(ModuleDeclarationData) visit_module_declaration [MODULE_DECLARATION] {
                scalars {
                    is_open: bool => Open,
                }
                slots {
                    name: required(NAME) => Name,
                    directives: list(MODULE_DIRECTIVE) => Directives,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            /// `requires [transitive] [static] name;`
            ModuleRequiresDirective(ModuleRequiresDirectiveData) visit_module_requires_directive [MODULE_DIRECTIVE] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                    modifiers: list(MODIFIER) => Modifiers,
                }
            }
            ModuleExportsDirective(ModuleExportsDirectiveData) visit_module_exports_directive [MODULE_DIRECTIVE] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                    module_names: list(NAME) => ModuleNames,
                }
            }
            ModuleOpensDirective(ModuleOpensDirectiveData) visit_module_opens_directive [MODULE_DIRECTIVE] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                    module_names: list(NAME) => ModuleNames,
                }
            }
            ModuleUsesDirective(ModuleUsesDirectiveData) visit_module_uses_directive [MODULE_DIRECTIVE] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                }
            }
            /// `provides name with impl, ...;`
            ModuleProvidesDirective(ModuleProvidesDirectiveData) visit_module_provides_directive [MODULE_DIRECTIVE] {
                scalars {}
                slots {
                    name: required(NAME) => Name,
                    with: list(NAME) => With,
                }
            }

            // -----------------------------------------------------------------
            // Statements
            // -----------------------------------------------------------------

            BlockStmt(BlockStmtData) visit_block_stmt [STATEMENT | BLOCK] {
                scalars {}
                slots {
                    statements: list(STATEMENT) => Statements,
                }
            }
            ExpressionStmt(ExpressionStmtData) visit_expression_stmt [STATEMENT] {
                scalars {}
                slots {
                    expression: required(EXPRESSION) => Expression,
                }
            }
            LabeledStmt(LabeledStmtData) visit_labeled_stmt [STATEMENT] {
                scalars {}
                slots {
                    label: required(SIMPLE_NAME) => Label,
                    statement: required(STATEMENT) => Statement,
                }
            }
            WhileStmt(WhileStmtData) visit_while_stmt [STATEMENT] {
                scalars {}
                slots {
                    condition: required(EXPRESSION) => Condition,
                    body: required(STATEMENT) => Body,
                }
            }
            DoStmt(DoStmtData) visit_do_stmt [STATEMENT] {
                scalars {}
                slots {
                    body: required(STATEMENT) => Body,
                    condition: required(EXPRESSION) => Condition,
                }
            }
            IfStmt(IfStmtData) visit_if_stmt [STATEMENT] {
                scalars {}
                slots {
                    condition: required(EXPRESSION) => Condition,
                    then_stmt: required(STATEMENT) => ThenStmt,
                    else_stmt: optional(STATEMENT) => ElseStmt,
                }
            }
            ForStmt(ForStmtData) visit_for_stmt [STATEMENT] {
                scalars {}
                slots {
                    initialization: list(EXPRESSION) => Initialization,
                    compare: optional(EXPRESSION) => Compare,
                    update: list(EXPRESSION) => Update,
                    body: required(STATEMENT) => Body,
                }
            }
            ForEachStmt(ForEachStmtData) visit_for_each_stmt [STATEMENT] {
                scalars {}
                slots {
                    variable: required(VARIABLE_DECLARATION) => Variable,
                    iterable: required(EXPRESSION) => Iterable,
                    body: required(STATEMENT) => Body,
                }
            }
            ReturnStmt(ReturnStmtData) visit_return_stmt [STATEMENT] {
                scalars {}
                slots {
                    expression: optional(EXPRESSION) => Expression,
                }
            }
            BreakStmt(BreakStmtData) visit_break_stmt [STATEMENT] {
                scalars {}
                slots {
                    label: optional(SIMPLE_NAME) => Label,
                }
            }
            ContinueStmt(ContinueStmtData) visit_continue_stmt [STATEMENT] {
                scalars {}
                slots {
                    label: optional(SIMPLE_NAME) => Label,
                }
            }
            ThrowStmt(ThrowStmtData) visit_throw_stmt [STATEMENT] {
                scalars {}
                slots {
                    expression: required(EXPRESSION) => Expression,
                }
            }
            SwitchStmt(SwitchStmtData) visit_switch_stmt [STATEMENT] {
                scalars {}
                slots {
                    selector: required(EXPRESSION) => Selector,
                    entries: list(SWITCH_ENTRY) => Entries,
                }
            }
            /// One `case`/`default` group. `default` has no labels.
            SwitchEntry(SwitchEntryData) visit_switch_entry [SWITCH_ENTRY] {
                scalars {}
                slots {
                    labels: list(EXPRESSION) => Labels,
                    statements: list(STATEMENT) => Statements,
                }
            }
            TryStmt(TryStmtData) visit_try_stmt [STATEMENT] {
                scalars {}
                slots {
                    resources: list(EXPRESSION) => Resources,
                    try_block: required(BLOCK) => TryBlock,
                    catch_clauses: list(CATCH_CLAUSE) => CatchClauses,
                    finally_block: optional(BLOCK) => FinallyBlock,
                }
            }
            CatchClause(CatchClauseData) visit_catch_clause [CATCH_CLAUSE] {
                scalars {}
                slots {
                    parameter: required(PARAMETER) => Parameter,
                    body: required(BLOCK) => Body,
                }
            }
            SynchronizedStmt(SynchronizedStmtData) visit_synchronized_stmt [STATEMENT] {
                scalars {}
                slots {
                    expression: required(EXPRESSION) => Expression,
                    body: required(BLOCK) => Body,
                }
            }
            LocalClassDeclarationStmt(LocalClassDeclarationStmtData) visit_local_class_declaration_stmt [STATEMENT] {
                scalars {}
                slots {
                    class_declaration: required(TYPE_DECLARATION) => ClassDeclaration,
                }
            }
            EmptyStmt(EmptyStmtData) visit_empty_stmt [STATEMENT] {
                scalars {}
                slots {}
            }
            AssertStmt(AssertStmtData) visit_assert_stmt [STATEMENT] {
                scalars {}
                slots {
                    check: required(EXPRESSION) => Check,
                    message: optional(EXPRESSION) => Message,
                }
            }

            // -----------------------------------------------------------------
            // Expressions
            // -----------------------------------------------------------------

            NameExpr(NameExprData) visit_name_expr [EXPRESSION] {
                scalars {}
                slots {
                    name: required(SIMPLE_NAME) => Name,
                }
            }
            /// Literal text as written, e.g. `0x1F` or `10L`.
            IntegerLiteralExpr(IntegerLiteralExprData) visit_integer_literal_expr [EXPRESSION] {
                scalars {
                    value: String => Value,
                }
                slots {}
            }
            DoubleLiteralExpr(DoubleLiteralExprData) visit_double_literal_expr [EXPRESSION] {
                scalars {
                    value: String => Value,
                }
                slots {}
            }
            CharLiteralExpr(CharLiteralExprData) visit_char_literal_expr [EXPRESSION] {
                scalars {
                    value: String => Value,
                }
                slots {}
            }
            StringLiteralExpr(StringLiteralExprData) visit_string_literal_expr [EXPRESSION] {
                scalars {
                    value: String => Value,
                }
                slots {}
            }
            BooleanLiteralExpr(BooleanLiteralExprData) visit_boolean_literal_expr [EXPRESSION] {
                scalars {
                    value: bool => Value,
                }
                slots {}
            }
            NullLiteralExpr(NullLiteralExprData) visit_null_literal_expr [EXPRESSION] {
                scalars {}
                slots {}
            }
            BinaryExpr(BinaryExprData) visit_binary_expr [EXPRESSION] {
                scalars {
                    operator: $crate::operators::BinaryOperator => Operator,
                }
                slots {
                    left: required(EXPRESSION) => Left,
                    right: required(EXPRESSION) => Right,
                }
            }
            UnaryExpr(UnaryExprData) visit_unary_expr [EXPRESSION] {
                scalars {
                    operator: $crate::operators::UnaryOperator => Operator,
                }
                slots {
                    expression: required(EXPRESSION) => Expression,
                }
            }
            AssignExpr(AssignExprData) visit_assign_expr [EXPRESSION] {
                scalars {
                    operator: $crate::operators::AssignOperator => Operator,
                }
                slots {
                    target: required(EXPRESSION) => Target,
                    value: required(EXPRESSION) => Value,
                }
            }
            ConditionalExpr(ConditionalExprData) visit_conditional_expr [EXPRESSION] {
                scalars {}
                slots {
                    condition: required(EXPRESSION) => Condition,
                    then_expr: required(EXPRESSION) => ThenExpr,
                    else_expr: required(EXPRESSION) => ElseExpr,
                }
            }
            EnclosedExpr(EnclosedExprData) visit_enclosed_expr [EXPRESSION] {
                scalars {}
                slots {
                    inner: required(EXPRESSION) => Inner,
                }
            }
            CastExpr(CastExprData) visit_cast_expr [EXPRESSION] {
                scalars {}
                slots {
                    ty: required(TYPE) => Type,
                    expression: required(EXPRESSION) => Expression,
                }
            }
            MethodCallExpr(MethodCallExprData) visit_method_call_expr [EXPRESSION] {
                scalars {}
                slots {
                    scope: optional(EXPRESSION) => Scope,
                    type_arguments: list(TYPE) => TypeArguments,
                    name: required(SIMPLE_NAME) => Name,
                    arguments: list(EXPRESSION) => Arguments,
                }
            }
            FieldAccessExpr(FieldAccessExprData) visit_field_access_expr [EXPRESSION] {
                scalars {}
                slots {
                    scope: required(EXPRESSION) => Scope,
                    type_arguments: list(TYPE) => TypeArguments,
                    name: required(SIMPLE_NAME) => Name,
                }
            }
            /// `new T(args) { body }`. A non-empty body makes an anonymous class.
            ObjectCreationExpr(ObjectCreationExprData) visit_object_creation_expr [EXPRESSION] {
                scalars {}
                slots {
                    scope: optional(EXPRESSION) => Scope,
                    ty: required(CLASS_TYPE) => Type,
                    type_arguments: list(TYPE) => TypeArguments,
                    arguments: list(EXPRESSION) => Arguments,
                    anonymous_class_body: list(BODY_DECLARATION) => AnonymousClassBody,
                }
            }
            ArrayAccessExpr(ArrayAccessExprData) visit_array_access_expr [EXPRESSION] {
                scalars {}
                slots {
                    name: required(EXPRESSION) => Name,
                    index: required(EXPRESSION) => Index,
                }
            }
            ThisExpr(ThisExprData) visit_this_expr [EXPRESSION] {
                scalars {}
                slots {
                    type_name: optional(NAME) => TypeName,
                }
            }
            LambdaExpr(LambdaExprData) visit_lambda_expr [EXPRESSION] {
                scalars {
                    enclosing_parameters: bool => EnclosingParameters,
                }
                slots {
                    parameters: list(PARAMETER) => Parameters,
                    body: required(STATEMENT) => Body,
                }
            }
            /// Local variable declaration, e.g. `final int a = 1, b;`.
            VariableDeclarationExpr(VariableDeclarationExprData) visit_variable_declaration_expr [EXPRESSION | VARIABLE_DECLARATION] {
                scalars {}
                slots {
                    variables: list(VARIABLE_DECLARATOR) => Variables,
                    modifiers: list(MODIFIER) => Modifiers,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }

            // -----------------------------------------------------------------
            // Types
            // -----------------------------------------------------------------

            ClassOrInterfaceType(ClassOrInterfaceTypeData) visit_class_or_interface_type [TYPE | CLASS_TYPE] {
                scalars {}
                slots {
                    scope: optional(CLASS_TYPE) => Scope,
                    name: required(SIMPLE_NAME) => Name,
                    type_arguments: list(TYPE) => TypeArguments,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            PrimitiveType(PrimitiveTypeData) visit_primitive_type [TYPE] {
                scalars {
                    primitive: $crate::operators::Primitive => Primitive,
                }
                slots {
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            ArrayType(ArrayTypeData) visit_array_type [TYPE] {
                scalars {}
                slots {
                    component_type: required(TYPE) => ComponentType,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            VoidType(VoidTypeData) visit_void_type [TYPE] {
                scalars {}
                slots {
                    annotations: list(ANNOTATION) => Annotations,
                }
            }
            WildcardType(WildcardTypeData) visit_wildcard_type [TYPE] {
                scalars {}
                slots {
                    extended_type: optional(TYPE) => ExtendedType,
                    super_type: optional(TYPE) => SuperType,
                    annotations: list(ANNOTATION) => Annotations,
                }
            }

            // -----------------------------------------------------------------
            // Special values
            // -----------------------------------------------------------------

            /// Template placeholder usable wherever an expression or a
            /// statement is expected.
            PlaceholderExpr(PlaceholderExprData) visit_placeholder_expr [SPECIAL_VALUE | EXPRESSION | STATEMENT] {
                scalars {
                    name: String => Identifier,
                }
                slots {}
            }
            /// Template placeholder usable wherever a type is expected.
            PlaceholderType(PlaceholderTypeData) visit_placeholder_type [SPECIAL_VALUE | TYPE | CLASS_TYPE] {
                scalars {
                    name: String => Identifier,
                }
                slots {}
            }
        }
    };
}
